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


// Version and build metadata shown in the footer.
// BUILD_TIMESTAMP and GIT_COMMIT_ID are injected by build.rs

// local
use crate::i18n::Translator;


pub static APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the application.
pub fn core_version() -> &'static str {
    APP_VERSION
}

/// Indicates if we're currently running in release mode.
pub fn is_release_mode() -> bool {
    !cfg!(debug_assertions)
}

/// Returns the build timestamp.
pub fn build_timestamp() -> &'static str {
    env!("BUILD_TIMESTAMP")
}

/// Returns the latest git commit's ID, or "unknown".
pub fn commit_id() -> &'static str {
    env!("GIT_COMMIT_ID")
}

/// One-line footer text, e.g. `Debug | Built 2025-01-01 10:00:00 UTC | Commit 1a2b3c4`.
pub fn summary(tr: &Translator) -> String {
    let mode = if is_release_mode() {
        tr.t("footer.release")
    } else {
        tr.t("footer.debug")
    };
    format!(
        "{} | {} {} | {} {}",
        mode,
        tr.t("footer.built"),
        build_timestamp(),
        tr.t("footer.commit"),
        commit_id(),
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_mode_follows_debug_assertions() {
        assert_eq!(is_release_mode(), !cfg!(debug_assertions));
    }

    #[test]
    fn metadata_is_present() {
        assert_eq!(core_version(), env!("CARGO_PKG_VERSION"));
        assert!(!build_timestamp().is_empty());
        assert!(!commit_id().is_empty());
    }

    #[test]
    fn summary_mentions_mode_and_commit() {
        let text = summary(&Translator::default());
        let mode = if cfg!(debug_assertions) { "Debug" } else { "Release" };
        assert!(text.starts_with(mode));
        assert!(text.ends_with(commit_id()));
    }
}
