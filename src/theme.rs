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
use eframe::egui::{Context, ThemePreference};
use thiserror::Error;

// Standard library
use std::str::FromStr;


// UI theme settings for the application
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Theme {
    #[default]
    System, // Follow the operating system
    Light,  // Light mode visuals
    Dark,   // Dark mode visuals
}

// Display languages offered in the settings dialog
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Language {
    #[default]
    En, // English
    Es, // Spanish
    Cn, // Chinese
    De, // German
}

/// Returned when a string key does not name a known theme or language.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseSelectionError {
    /// The control was cleared; a selection must always hold a value.
    #[error("empty {kind} selection")]
    Empty { kind: &'static str },
    #[error("unknown {kind}: {key:?}")]
    Unknown { kind: &'static str, key: String },
}

impl ParseSelectionError {
    fn new(kind: &'static str, key: &str) -> Self {
        if key.is_empty() {
            ParseSelectionError::Empty { kind }
        } else {
            ParseSelectionError::Unknown { kind, key: key.to_string() }
        }
    }
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    /// Stable string key, as used by the select control.
    pub fn key(self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Translation key of the option label.
    pub fn label_key(self) -> &'static str {
        match self {
            Theme::System => "settings.theme.system",
            Theme::Light => "settings.theme.light",
            Theme::Dark => "settings.theme.dark",
        }
    }

    /// Applies the theme to the egui context.
    pub fn apply(self, ctx: &Context) {
        ctx.set_theme(ThemePreference::from(self));
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::System => ThemePreference::System,
            Theme::Light => ThemePreference::Light,
            Theme::Dark => ThemePreference::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| ParseSelectionError::new("theme", s))
    }
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Es, Language::Cn, Language::De];

    pub fn key(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Cn => "cn",
            Language::De => "de",
        }
    }

    // Language names are shown in their own language, never translated
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Cn => "中文",
            Language::De => "Deutsch",
        }
    }
}

impl FromStr for Language {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.key() == s)
            .ok_or_else(|| ParseSelectionError::new("language", s))
    }
}
