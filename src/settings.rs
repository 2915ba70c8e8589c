// MIT License
// Copyright (c) Valan Sai 2025
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.



// installed
use eframe::egui::{Align, ComboBox, Grid, Id, Layout, Modal, Ui};
use log::{debug, info};

// local
use crate::i18n::Translator;
use crate::theme::{Language, Theme};


/// Change event forwarded to the dialog's callbacks.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SelectionChange<T> {
    /// Value selected before the change.
    pub previous: T,

    /// Newly selected value.
    pub value: T,
}

pub type ChangeCallback<T> = Box<dyn FnMut(&SelectionChange<T>)>;

// Buttons in the dialog footer
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FooterAction {
    Close,
    Save,
}

/// Settings trigger button plus the modal it opens.
///
/// Selections always hold one of the enumerated values; the controls offer
/// nothing else and cannot be cleared. Saving does not persist anything yet,
/// both footer buttons just dismiss the modal.
pub struct SettingsDialog {
    default_theme: Option<Theme>,
    default_lang: Option<Language>,
    on_theme_change: Option<ChangeCallback<Theme>>,
    on_lang_change: Option<ChangeCallback<Language>>,
    theme: Theme,
    language: Language,
    open: bool,
}

impl Default for SettingsDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsDialog {
    pub fn new() -> Self {
        Self {
            default_theme: None,
            default_lang: None,
            on_theme_change: None,
            on_lang_change: None,
            theme: Theme::default(),
            language: Language::default(),
            open: false,
        }
    }

    pub fn default_theme(mut self, theme: Theme) -> Self {
        self.set_default_theme(Some(theme));
        self
    }

    pub fn default_lang(mut self, language: Language) -> Self {
        self.set_default_lang(Some(language));
        self
    }

    pub fn on_theme_change(mut self, callback: impl FnMut(&SelectionChange<Theme>) + 'static) -> Self {
        self.on_theme_change = Some(Box::new(callback));
        self
    }

    pub fn on_lang_change(mut self, callback: impl FnMut(&SelectionChange<Language>) + 'static) -> Self {
        self.on_lang_change = Some(Box::new(callback));
        self
    }

    /// Updates the initial theme used the next time the modal opens.
    pub fn set_default_theme(&mut self, theme: Option<Theme>) {
        self.default_theme = theme;
        if !self.open {
            self.theme = theme.unwrap_or_default();
        }
    }

    /// Updates the initial language used the next time the modal opens.
    pub fn set_default_lang(&mut self, language: Option<Language>) {
        self.default_lang = language;
        if !self.open {
            self.language = language.unwrap_or_default();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Currently selected theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Currently selected language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Opens the modal with the selections reset to their defaults.
    pub fn open(&mut self) {
        self.theme = self.default_theme.unwrap_or_default();
        self.language = self.default_lang.unwrap_or_default();
        self.open = true;
        info!("settings opened (theme: {}, language: {})", self.theme.key(), self.language.key());
    }

    pub fn close(&mut self) {
        if self.open {
            info!("settings closed");
        }
        self.open = false;
    }

    /// Called by the theme control when the user picks a value.
    pub fn select_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        let change = SelectionChange { previous: self.theme, value: theme };
        self.theme = theme;
        debug!("theme changed {} -> {}", change.previous.key(), change.value.key());
        if let Some(callback) = self.on_theme_change.as_mut() {
            callback(&change);
        }
    }

    /// Called by the language control when the user picks a value.
    pub fn select_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        let change = SelectionChange { previous: self.language, value: language };
        self.language = language;
        debug!("language changed {} -> {}", change.previous.key(), change.value.key());
        if let Some(callback) = self.on_lang_change.as_mut() {
            callback(&change);
        }
    }

    pub fn press(&mut self, action: FooterAction) {
        if action == FooterAction::Save {
            // TODO: persist the selections once a settings store exists
            debug!("save pressed, settings are not persisted");
        }
        self.close();
    }

    /// Renders the trigger button and, while open, the modal.
    pub fn ui(&mut self, ui: &mut Ui, tr: &Translator) {
        if ui.button("⚙").on_hover_text(tr.t("settings.open")).clicked() {
            self.open();
        }

        if !self.open {
            return;
        }

        let mut theme = self.theme;
        let mut language = self.language;

        let modal = Modal::new(Id::new("settings_modal")).show(ui.ctx(), |ui| {
            ui.set_width(300.0);
            ui.heading(tr.t("settings.title"));
            ui.add_space(8.0);

            Grid::new("settings_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.t("settings.themeSelectLabel"));
                    ComboBox::from_id_salt("settings_theme")
                        .selected_text(tr.t(theme.label_key()))
                        .show_ui(ui, |ui| {
                            for option in Theme::ALL {
                                ui.selectable_value(&mut theme, option, tr.t(option.label_key()));
                            }
                        });
                    ui.end_row();

                    ui.label(tr.t("settings.langSelectLabel"));
                    ComboBox::from_id_salt("settings_language")
                        .selected_text(language.native_name())
                        .show_ui(ui, |ui| {
                            for option in Language::ALL {
                                ui.selectable_value(&mut language, option, option.native_name());
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.separator();

            let mut pressed = None;
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(tr.t("settings.save")).clicked() {
                    pressed = Some(FooterAction::Save);
                }
                if ui.button(tr.t("settings.close")).clicked() {
                    pressed = Some(FooterAction::Close);
                }
            });
            pressed
        });

        self.select_theme(theme);
        self.select_language(language);

        if let Some(action) = modal.inner {
            self.press(action);
        } else if modal.should_close() {
            self.close();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn defaults_without_props() {
        let mut dialog = SettingsDialog::new();
        dialog.open();
        assert_eq!(dialog.theme(), Theme::System);
        assert_eq!(dialog.language(), Language::En);
    }

    #[test]
    fn preselects_given_defaults() {
        let mut dialog = SettingsDialog::new()
            .default_theme(Theme::Dark)
            .default_lang(Language::De);
        dialog.open();
        assert!(dialog.is_open());
        assert_eq!(dialog.theme(), Theme::Dark);
        assert_eq!(dialog.language(), Language::De);
    }

    #[test]
    fn theme_change_invokes_callback_once() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let mut dialog = SettingsDialog::new().on_theme_change(move |change| {
            sink.borrow_mut().push(*change);
        });

        dialog.open();
        dialog.select_theme(Theme::Light);

        assert_eq!(
            *events.borrow(),
            vec![SelectionChange { previous: Theme::System, value: Theme::Light }]
        );
        assert_eq!(dialog.theme(), Theme::Light);
    }

    #[test]
    fn reselecting_current_value_is_not_a_change() {
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let mut dialog = SettingsDialog::new()
            .default_lang(Language::Es)
            .on_lang_change(move |_| *sink.borrow_mut() += 1);

        dialog.open();
        dialog.select_language(Language::Es);
        assert_eq!(*count.borrow(), 0);

        dialog.select_language(Language::Cn);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn change_without_callback_is_silent() {
        let mut dialog = SettingsDialog::new();
        dialog.open();
        dialog.select_theme(Theme::Light);
        dialog.select_language(Language::Cn);
        assert_eq!(dialog.theme(), Theme::Light);
        assert_eq!(dialog.language(), Language::Cn);
    }

    #[test]
    fn either_footer_button_closes() {
        for action in [FooterAction::Close, FooterAction::Save] {
            let mut dialog = SettingsDialog::new();
            dialog.open();
            assert!(dialog.is_open());
            dialog.press(action);
            assert!(!dialog.is_open());
        }
    }

    #[test]
    fn reopening_resets_to_defaults() {
        let mut dialog = SettingsDialog::new().default_theme(Theme::Dark);
        dialog.open();
        dialog.select_theme(Theme::Light);
        dialog.press(FooterAction::Save);

        dialog.open();
        assert_eq!(dialog.theme(), Theme::Dark);
    }

    #[test]
    fn escape_closes_modal() {
        let ctx = egui::Context::default();
        let tr = Translator::default();
        let mut dialog = SettingsDialog::new().default_theme(Theme::Dark);
        dialog.open();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| dialog.ui(ui, &tr));
        });
        assert!(dialog.is_open());

        let escape = egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            }],
            ..Default::default()
        };
        let _ = ctx.run(escape, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| dialog.ui(ui, &tr));
        });

        assert!(!dialog.is_open());
        assert_eq!(dialog.theme(), Theme::Dark);
    }

    #[test]
    fn renders_open_modal_headless() {
        let ctx = egui::Context::default();
        let tr = Translator::default();
        let mut dialog = SettingsDialog::new();
        dialog.open();

        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| dialog.ui(ui, &tr));
            });
        }
        assert!(dialog.is_open());
        assert_eq!(dialog.theme(), Theme::System);
    }
}
