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


mod app;
mod build_info;
mod helper;
mod i18n;
mod send_view;
mod settings;
mod theme;


// External crates
use eframe::{self, egui, App, NativeOptions};
use log::info;

// local
use crate::app::{PylonApp, APP_NAME};
use crate::build_info::{build_timestamp, commit_id, core_version, is_release_mode};
use crate::helper::init_logging;


static LOG_FILE: &str = "debug.log";


fn main() -> Result<(), eframe::Error> {
    // Initialize logging; the UI still starts without it
    if let Err(e) = init_logging(LOG_FILE) {
        eprintln!("logging disabled: {}", e);
    }

    info!(
        "[*] Starting {} v{} (release: {}, built {}, commit {})",
        APP_NAME,
        core_version(),
        is_release_mode(),
        build_timestamp(),
        commit_id(),
    );

    // Window options
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([850.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    // Run native eframe app
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|_cc| Ok(Box::new(PylonApp::default()) as Box<dyn App>)),
    )
}
