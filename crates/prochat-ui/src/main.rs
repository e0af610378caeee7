#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! ProChat UI wasm entry point and native markup renderer.

#[cfg(target_arch = "wasm32")]
fn main() {
    prochat_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use prochat_ui::config::RenderConfig;
    use prochat_ui::i18n::TranslationBundle;
    use prochat_ui::render_logo;
    use prochat_ui::telemetry::{LoggingConfig, init_logging};
    use std::io::{self, Write};

    init_logging(&LoggingConfig::default())?;
    let config = RenderConfig::from_env();
    tracing::info!(locale = config.locale.code(), class = ?config.class, "rendering logo");

    let bundle = TranslationBundle::new(config.locale);
    let markup = render_logo(config.attributes(), &bundle);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", markup.to_html())?;
    Ok(())
}
