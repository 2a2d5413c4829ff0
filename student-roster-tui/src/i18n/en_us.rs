//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, FormTexts, HelpActionTexts, HelpTexts, HintTexts, ListTexts, MessageTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Student Roster",
        add: "Add",
        update: "Update",
        delete: "Delete",
        quit: "Quit",
        help: "Help",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_panel: "Switch panel",
        switch_field: "Field",
        move_up_down: "Move",
        select: "Select",
        clear: "Clear",
        submit: "Submit",
    },

    // ========================================================================
    // 面板
    // ========================================================================
    form: FormTexts {
        title: "Student",
        student_id: "Student ID",
        student_id_hint: "e.g. SV01",
        name: "Name",
        name_hint: "e.g. Nguyen Van A",
        mode_new: "New",
        mode_editing: "Editing",
        id_not_saved: "(ID changes are not saved)",
    },

    list: ListTexts {
        title: "Students",
        empty: "No students yet",
        empty_hint: "Fill in the form and press Enter to add one",
        count_suffix: "students",
    },

    // ========================================================================
    // 状态栏消息
    // ========================================================================
    messages: MessageTexts {
        added: "Added",
        updated: "Updated",
        deleted: "Deleted",
        editing: "Editing",
        both_fields_required: "Please enter both student ID and name",
        name_required: "Please enter a name",
        select_to_update: "Please select a student to update",
        language_changed: "Language: English",
        theme_changed: "Theme changed",
        config_save_failed: "Could not save settings",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        form_shortcuts: "Form",
        list_shortcuts: "List",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            switch_field: "Switch field",
            submit: "Add (or update while editing)",
            clear_form: "Clear form",
            move_up_down: "Move Up/Down",
            select_row: "Load row into form",
            delete_row: "Delete row",
            language: "Switch language",
            theme: "Switch theme",
            quit: "Quit",
        },
    },
};
