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


//! Key-to-string lookup for the display language.
//!
//! Tables are static; a missing key falls back to English, then to the key
//! itself, so a lookup never fails.

// local
use crate::theme::Language;


/// ---------------------- Translation table macro ----------------------
/// Generates a static `(key, text)` table for one language
macro_rules! translations {
    ($name:ident { $($key:literal => $text:literal),+ $(,)? }) => {
        static $name: &[(&str, &str)] = &[$(($key, $text)),+];
    };
}

translations!(EN {
    "app.title" => "Pylon",
    "sendView.title" => "Send",
    "sendView.description" => "Drop a file or folder here, or choose what to send",
    "sendView.select" => "Select",
    "sendView.file" => "File",
    "sendView.folder" => "Folder",
    "sendView.dropHint" => "Drop to send",
    "settings.open" => "Settings",
    "settings.title" => "Settings",
    "settings.themeSelectLabel" => "Theme",
    "settings.langSelectLabel" => "Language",
    "settings.theme.system" => "System",
    "settings.theme.light" => "Light",
    "settings.theme.dark" => "Dark",
    "settings.close" => "Close",
    "settings.save" => "Save",
    "footer.release" => "Release",
    "footer.debug" => "Debug",
    "footer.built" => "Built",
    "footer.commit" => "Commit",
});

translations!(ES {
    "app.title" => "Pylon",
    "sendView.title" => "Enviar",
    "sendView.description" => "Suelta un archivo o carpeta aquí, o elige qué enviar",
    "sendView.select" => "Seleccionar",
    "sendView.file" => "Archivo",
    "sendView.folder" => "Carpeta",
    "sendView.dropHint" => "Suelta para enviar",
    "settings.open" => "Ajustes",
    "settings.title" => "Ajustes",
    "settings.themeSelectLabel" => "Tema",
    "settings.langSelectLabel" => "Idioma",
    "settings.theme.system" => "Sistema",
    "settings.theme.light" => "Claro",
    "settings.theme.dark" => "Oscuro",
    "settings.close" => "Cerrar",
    "settings.save" => "Guardar",
    "footer.release" => "Versión final",
    "footer.debug" => "Depuración",
    "footer.built" => "Compilado",
    "footer.commit" => "Commit",
});

translations!(CN {
    "app.title" => "Pylon",
    "sendView.title" => "发送",
    "sendView.description" => "将文件或文件夹拖放到此处，或选择要发送的内容",
    "sendView.select" => "选择",
    "sendView.file" => "文件",
    "sendView.folder" => "文件夹",
    "sendView.dropHint" => "松开以发送",
    "settings.open" => "设置",
    "settings.title" => "设置",
    "settings.themeSelectLabel" => "主题",
    "settings.langSelectLabel" => "语言",
    "settings.theme.system" => "跟随系统",
    "settings.theme.light" => "浅色",
    "settings.theme.dark" => "深色",
    "settings.close" => "关闭",
    "settings.save" => "保存",
    "footer.release" => "发布版",
    "footer.debug" => "调试版",
    "footer.built" => "构建于",
    "footer.commit" => "提交",
});

translations!(DE {
    "app.title" => "Pylon",
    "sendView.title" => "Senden",
    "sendView.description" => "Datei oder Ordner hier ablegen oder auswählen, was gesendet werden soll",
    "sendView.select" => "Auswählen",
    "sendView.file" => "Datei",
    "sendView.folder" => "Ordner",
    "sendView.dropHint" => "Zum Senden loslassen",
    "settings.open" => "Einstellungen",
    "settings.title" => "Einstellungen",
    "settings.themeSelectLabel" => "Design",
    "settings.langSelectLabel" => "Sprache",
    "settings.theme.system" => "System",
    "settings.theme.light" => "Hell",
    "settings.theme.dark" => "Dunkel",
    "settings.close" => "Schließen",
    "settings.save" => "Speichern",
    "footer.release" => "Release",
    "footer.debug" => "Debug",
    "footer.built" => "Erstellt",
    "footer.commit" => "Commit",
});


fn table(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => EN,
        Language::Es => ES,
        Language::Cn => CN,
        Language::De => DE,
    }
}

fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    table(lang).iter().find(|(k, _)| *k == key).map(|(_, text)| *text)
}

/// Resolves translation keys for the active display language.
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Looks up `key` in the active language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        if let Some(text) = lookup(self.language, key) {
            return text;
        }
        if let Some(text) = lookup(Language::En, key) {
            log::warn!("missing {} translation for {}", self.language.key(), key);
            return text;
        }
        log::warn!("unknown translation key {}", key);
        key
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_every_english_key() {
        for lang in Language::ALL {
            for (key, _) in EN {
                assert!(lookup(lang, key).is_some(), "{} is missing {}", lang.key(), key);
            }
            assert_eq!(table(lang).len(), EN.len(), "{} has extra keys", lang.key());
        }
    }

    #[test]
    fn resolves_active_language() {
        let mut tr = Translator::default();
        assert_eq!(tr.t("settings.save"), "Save");

        tr.set_language(Language::De);
        assert_eq!(tr.language(), Language::De);
        assert_eq!(tr.t("settings.save"), "Speichern");
        assert_eq!(tr.t("sendView.folder"), "Ordner");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let tr = Translator::new(Language::Es);
        assert_eq!(tr.t("sendView.nothing"), "sendView.nothing");
    }
}
