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



// External crates
use eframe::egui::{self, Align, CentralPanel, Context, Layout, TopBottomPanel};
use log::info;
use tokio::sync::mpsc::{self, UnboundedReceiver};

// local
use crate::build_info::{self, APP_VERSION};
use crate::i18n::Translator;
use crate::send_view::SendView;
use crate::settings::SettingsDialog;
use crate::theme::{Language, Theme};


pub static APP_NAME: &str = "Pylon";


/// Session preferences. Held in memory only, never written to disk.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

// Changes reported by the settings dialog callbacks
#[derive(Debug, Clone, Copy)]
enum PreferenceChange {
    Theme(Theme),
    Language(Language),
}

pub struct PylonApp {
    preferences: Preferences,                   // Current session preferences
    applied_theme: Option<Theme>,               // Theme last pushed to the egui context
    translator: Translator,                     // Lookup for the active language
    send_view: SendView,                        // Central send screen
    settings: SettingsDialog,                   // Settings trigger + modal
    changes: UnboundedReceiver<PreferenceChange>, // Filled by the dialog callbacks
}

impl Default for PylonApp {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}

impl PylonApp {
    pub fn new(preferences: Preferences) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let theme_tx = tx.clone();

        let settings = SettingsDialog::new()
            .default_theme(preferences.theme)
            .default_lang(preferences.language)
            .on_theme_change(move |change| {
                let _ = theme_tx.send(PreferenceChange::Theme(change.value));
            })
            .on_lang_change(move |change| {
                let _ = tx.send(PreferenceChange::Language(change.value));
            });

        Self {
            preferences,
            applied_theme: None,
            translator: Translator::new(preferences.language),
            send_view: SendView::new(),
            settings,
            changes: rx,
        }
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    // Drains the dialog's change notifications into the session preferences
    fn apply_changes(&mut self) {
        while let Ok(change) = self.changes.try_recv() {
            match change {
                PreferenceChange::Theme(theme) => {
                    info!("theme set to {}", theme.key());
                    self.preferences.theme = theme;
                    self.settings.set_default_theme(Some(theme));
                }
                PreferenceChange::Language(language) => {
                    info!("language set to {}", language.key());
                    self.preferences.language = language;
                    self.translator.set_language(language);
                    self.settings.set_default_lang(Some(language));
                }
            }
        }
    }

    /// Lays out one frame.
    pub fn ui(&mut self, ctx: &Context) {
        // Top bar
        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("📡 {}", self.translator.t("app.title")));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    self.settings.ui(ui, &self.translator);
                });
            });
        });

        // Picks up what the dialog changed above, before the rest is laid out
        self.apply_changes();

        if self.applied_theme != Some(self.preferences.theme) {
            self.preferences.theme.apply(ctx);
            self.applied_theme = Some(self.preferences.theme);
        }

        // Footer
        TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} v{}", APP_NAME, APP_VERSION));
                ui.separator();
                ui.label(build_info::summary(&self.translator));
            });
        });

        // Main content
        CentralPanel::default().show(ctx, |ui| {
            self.send_view.ui(ui, &self.translator);
        });
    }
}

impl eframe::App for PylonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(app: &mut PylonApp, ctx: &Context) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.ui(ctx));
    }

    #[test]
    fn starts_with_given_preferences() {
        let prefs = Preferences { theme: Theme::Dark, language: Language::De };
        let mut app = PylonApp::new(prefs);
        assert_eq!(app.preferences(), prefs);
        assert_eq!(app.translator.language(), Language::De);

        app.settings.open();
        assert_eq!(app.settings.theme(), Theme::Dark);
        assert_eq!(app.settings.language(), Language::De);
    }

    #[test]
    fn dialog_changes_reach_preferences() {
        let mut app = PylonApp::default();
        app.settings.open();
        app.settings.select_theme(Theme::Light);
        app.settings.select_language(Language::Cn);
        app.apply_changes();

        assert_eq!(
            app.preferences(),
            Preferences { theme: Theme::Light, language: Language::Cn }
        );
        assert_eq!(app.translator.t("settings.save"), "保存");
    }

    #[test]
    fn changes_survive_reopening_for_the_session() {
        let mut app = PylonApp::default();
        app.settings.open();
        app.settings.select_language(Language::Es);
        app.apply_changes();
        app.settings.close();

        app.settings.open();
        assert_eq!(app.settings.language(), Language::Es);
    }

    #[test]
    fn dialog_change_lands_within_one_frame() {
        let ctx = Context::default();
        let mut app = PylonApp::default();
        run_frame(&mut app, &ctx);

        app.settings.open();
        app.settings.select_theme(Theme::Dark);
        app.settings.select_language(Language::De);
        run_frame(&mut app, &ctx);

        assert_eq!(
            app.preferences(),
            Preferences { theme: Theme::Dark, language: Language::De }
        );
        assert_eq!(app.translator.t("settings.close"), "Schließen");
        assert_eq!(ctx.options(|o| o.theme_preference), egui::ThemePreference::Dark);
        assert!(app.changes.try_recv().is_err());
    }

    #[test]
    fn frame_applies_theme_to_context() {
        let ctx = Context::default();
        let mut app = PylonApp::new(Preferences { theme: Theme::Dark, language: Language::En });
        run_frame(&mut app, &ctx);
        assert_eq!(app.applied_theme, Some(Theme::Dark));
        assert_eq!(ctx.options(|o| o.theme_preference), egui::ThemePreference::Dark);

        app.settings.open();
        app.settings.select_theme(Theme::Light);
        run_frame(&mut app, &ctx);
        assert_eq!(app.applied_theme, Some(Theme::Light));
    }
}
