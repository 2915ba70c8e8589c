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
use eframe::egui::{
    Align2, CornerRadius, Id, LayerId, Order, RichText, Stroke, StrokeKind, TextStyle, Ui,
};
use log::debug;

// local
use crate::i18n::Translator;


// Kinds of source the user can pick on the send screen
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SendSource {
    File,   // A single file
    Folder, // A whole directory
}

impl SendSource {
    pub const ALL: [SendSource; 2] = [SendSource::File, SendSource::Folder];

    pub fn label_key(self) -> &'static str {
        match self {
            SendSource::File => "sendView.file",
            SendSource::Folder => "sendView.folder",
        }
    }
}

/// The send screen: icon, instructions and the source-type dropdown.
///
/// The dropdown entries have no selection handler yet; picking one only
/// closes the menu. Dropped files are not consumed either.
#[derive(Debug, Default)]
pub struct SendView;

impl SendView {
    pub fn new() -> Self {
        Self
    }

    /// Dropdown entries in display order.
    pub fn options(&self, tr: &Translator) -> Vec<(SendSource, &'static str)> {
        SendSource::ALL
            .into_iter()
            .map(|source| (source, tr.t(source.label_key())))
            .collect()
    }

    /// Renders the send screen.
    pub fn ui(&mut self, ui: &mut Ui, tr: &Translator) {
        self.paint_drop_hint(ui, tr);

        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(RichText::new("📤").size(64.0));
            ui.add_space(10.0);
            ui.heading(tr.t("sendView.title"));
            ui.label(tr.t("sendView.description"));
            ui.add_space(15.0);

            ui.menu_button(format!("{} ⏷", tr.t("sendView.select")), |ui| {
                for (source, label) in self.options(tr) {
                    if ui.button(label).clicked() {
                        debug!("send source {:?} picked, no handler attached", source);
                        ui.close();
                    }
                }
            });
        });
    }

    // Drop-target hint while files hover over the window
    fn paint_drop_hint(&self, ui: &Ui, tr: &Translator) {
        let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        if !hovering_files {
            return;
        }

        let color = ui.visuals().strong_text_color();
        let painter = ui.ctx().layer_painter(LayerId::new(
            Order::Foreground,
            Id::new("send_drop_target"),
        ));
        let rect = ui.ctx().screen_rect();
        painter.rect_stroke(
            rect,
            CornerRadius::same(0),
            Stroke::new(2.0, color),
            StrokeKind::Inside,
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            format!("📂 {}", tr.t("sendView.dropHint")),
            TextStyle::Heading.resolve(ui.style()),
            color,
        );
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Language;
    use eframe::egui;

    #[test]
    fn offers_file_and_folder() {
        let view = SendView::new();
        let tr = Translator::default();
        assert_eq!(
            view.options(&tr),
            vec![(SendSource::File, "File"), (SendSource::Folder, "Folder")]
        );
    }

    #[test]
    fn options_follow_language() {
        let view = SendView::new();
        let tr = Translator::new(Language::Es);
        let labels: Vec<_> = view.options(&tr).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, ["Archivo", "Carpeta"]);
    }

    #[test]
    fn renders_headless() {
        let ctx = egui::Context::default();
        let tr = Translator::default();
        let mut view = SendView::new();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| view.ui(ui, &tr));
            });
        }
    }
}
