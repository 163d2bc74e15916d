use crate::config::QuoteConfig;
use crate::core::data::QuoteStore;
use crate::core::selector::select_many;
use crate::utils::error::AppResult;
use std::io::Write;
use tracing::debug;

/// Selects and formats quotes from `store` according to `config`.
pub fn render_quotes(config: &QuoteConfig, store: &QuoteStore) -> AppResult<String> {
    let base_seed = config.base_seed();
    debug!(
        base_seed,
        count = config.count,
        format = %config.format,
        source = ?store.source(),
        "selecting quotes"
    );

    let selected = select_many(store.quotes(), base_seed, config.count)?;
    Ok(config.format.render(&selected))
}

pub fn handle_quotes_command(config: &QuoteConfig, out: &mut impl Write) -> AppResult<()> {
    let store = QuoteStore::load();
    let output = render_quotes(config, &store)?;

    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}
