use invoicedesk_console::{Console, ConsoleConfig};
use invoicedesk_invoicing::InvoiceStore;

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env();
    invoicedesk_observability::init(config.log_format);

    for (key, value) in &config.ignored {
        tracing::warn!(%key, %value, "unrecognised value; using default");
    }

    let mut store = if config.seed {
        InvoiceStore::seeded()
    } else {
        InvoiceStore::new()
    };
    tracing::info!(invoices = store.invoices().len(), "invoice console starting");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(&mut store, stdin.lock(), stdout.lock()).run()?;

    tracing::info!(version = store.version(), "invoice console exiting");
    Ok(())
}
