//! 越南语翻译 (vi-VN)

use super::keys::{
    CommonTexts, FormTexts, HelpActionTexts, HelpTexts, HintTexts, ListTexts, MessageTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Danh sách sinh viên",
        add: "Thêm",
        update: "Cập nhật",
        delete: "Xóa",
        quit: "Thoát",
        help: "Trợ giúp",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_panel: "Đổi khung",
        switch_field: "Ô nhập",
        move_up_down: "Di chuyển",
        select: "Chọn",
        clear: "Xóa ô",
        submit: "Lưu",
    },

    // ========================================================================
    // 面板
    // ========================================================================
    form: FormTexts {
        title: "Sinh viên",
        student_id: "MSSV",
        student_id_hint: "vd. SV01",
        name: "Họ tên",
        name_hint: "vd. Nguyễn Văn A",
        mode_new: "Mới",
        mode_editing: "Đang sửa",
        id_not_saved: "(MSSV không được cập nhật)",
    },

    list: ListTexts {
        title: "Sinh viên",
        empty: "Chưa có sinh viên",
        empty_hint: "Nhập thông tin và nhấn Enter để thêm",
        count_suffix: "sinh viên",
    },

    // ========================================================================
    // 状态栏消息
    // ========================================================================
    messages: MessageTexts {
        added: "Đã thêm",
        updated: "Đã cập nhật",
        deleted: "Đã xóa",
        editing: "Đang sửa",
        both_fields_required: "Vui lòng nhập cả MSSV và họ tên",
        name_required: "Vui lòng nhập họ tên",
        select_to_update: "Vui lòng chọn sinh viên cần cập nhật",
        language_changed: "Ngôn ngữ: Tiếng Việt",
        theme_changed: "Đã đổi giao diện",
        config_save_failed: "Không lưu được cài đặt",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Trợ giúp",
        global_shortcuts: "Phím tắt chung",
        form_shortcuts: "Biểu mẫu",
        list_shortcuts: "Danh sách",
        close_hint: "Nhấn Esc để đóng",
        actions: HelpActionTexts {
            switch_panel: "Đổi khung",
            switch_field: "Đổi ô nhập",
            submit: "Thêm (hoặc cập nhật khi đang sửa)",
            clear_form: "Xóa biểu mẫu",
            move_up_down: "Lên/Xuống",
            select_row: "Nạp dòng vào biểu mẫu",
            delete_row: "Xóa dòng",
            language: "Đổi ngôn ngữ",
            theme: "Đổi giao diện",
            quit: "Thoát",
        },
    },
};
