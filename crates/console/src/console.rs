//! Interactive loop: read a line, run it against the store, render the result.

use std::io::{BufRead, Write};

use invoicedesk_invoicing::{Invoice, InvoiceForm, InvoiceStore, Operation};

use crate::command::{Command, HELP};

/// Line-oriented front end over a borrowed store.
///
/// The console never touches the collection directly; every change goes through
/// `InvoiceStore::submit` and the list is re-rendered whenever the store version moves.
pub struct Console<'a, R, W> {
    store: &'a mut InvoiceStore,
    input: R,
    output: W,
}

impl<'a, R, W> Console<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a mut InvoiceStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.render_list()?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(())
    }

    /// Execute a single command.
    pub fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::List => self.render_list()?,
            Command::Show(id) => self.render_detail(&id)?,
            Command::Add => self.fill_and_submit(InvoiceForm::blank())?,
            Command::Edit(id) => match self.store.get(&id) {
                Some(invoice) => {
                    let form = InvoiceForm::for_edit(invoice);
                    self.fill_and_submit(form)?
                }
                None => writeln!(self.output, "no invoice `{id}`")?,
            },
            Command::Delete(id) => self.confirm_and_delete(&id)?,
            Command::Toggle(id) => {
                if self.store.get(&id).is_none() {
                    writeln!(self.output, "no invoice `{id}`")?;
                } else {
                    self.submit(Operation::toggle_status(id.clone()))?;
                    self.render_detail(&id)?;
                }
            }
            Command::Summary => self.render_summary()?,
            Command::Json => {
                let json = serde_json::to_string_pretty(self.store.invoices())?;
                writeln!(self.output, "{json}")?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// Submit and re-render on change. Returns whether the store accepted it.
    fn submit(&mut self, operation: Operation) -> anyhow::Result<bool> {
        let before = self.store.version();
        match self.store.submit(operation) {
            Ok(_) => {
                if self.store.version() != before {
                    self.render_list()?;
                }
                Ok(true)
            }
            Err(err) => {
                writeln!(self.output, "error: {err}")?;
                Ok(false)
            }
        }
    }

    /// Prompt for every field, submit, and on rejection offer to correct the same form.
    fn fill_and_submit(&mut self, mut form: InvoiceForm) -> anyhow::Result<()> {
        loop {
            if !self.fill_form(&mut form)? {
                writeln!(self.output, "cancelled")?;
                return Ok(());
            }
            if self.submit(form.to_operation())? {
                return Ok(());
            }
            if !self.confirm("edit again?")? {
                return Ok(());
            }
        }
    }

    /// Returns false if input ended mid-form.
    fn fill_form(&mut self, form: &mut InvoiceForm) -> anyhow::Result<bool> {
        if form.is_edit() {
            writeln!(self.output, "id: {} (read-only)", form.id())?;
        } else {
            let Some(id) = self.prompt("id", form.id())? else {
                return Ok(false);
            };
            form.set_id(id);
        }

        let fields: [(&str, fn(&mut InvoiceForm) -> &mut String); 5] = [
            ("customer name", |f| &mut f.customer_name),
            ("product name", |f| &mut f.product_name),
            ("quantity", |f| &mut f.quantity),
            ("price", |f| &mut f.price),
            ("status (paid/unpaid)", |f| &mut f.status),
        ];
        for (label, field) in fields {
            let Some(value) = self.prompt(label, field(form))? else {
                return Ok(false);
            };
            *field(form) = value;
        }
        Ok(true)
    }

    fn confirm_and_delete(&mut self, id: &str) -> anyhow::Result<()> {
        if self.store.get(id).is_none() {
            writeln!(self.output, "no invoice `{id}`")?;
            return Ok(());
        }
        if self.confirm(&format!("delete invoice {id}?"))? {
            self.submit(Operation::delete(id))?;
        }
        Ok(())
    }

    /// `label [current]: `. Empty input keeps `current`; `None` on end of input.
    fn prompt(&mut self, label: &str, current: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{label} [{current}]: ")?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|line| {
            if line.is_empty() {
                current.to_string()
            } else {
                line
            }
        }))
    }

    /// `[y/N]` question; anything but `y`/`yes` is a no.
    fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        write!(self.output, "{question} [y/N]: ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default().to_ascii_lowercase();
        Ok(matches!(answer.trim(), "y" | "yes"))
    }

    /// Next line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn render_summary(&mut self) -> anyhow::Result<()> {
        let summary = self.store.summary();
        writeln!(
            self.output,
            "paid: {}  unpaid: {}",
            summary.paid_count, summary.unpaid_count
        )?;
        Ok(())
    }

    fn render_list(&mut self) -> anyhow::Result<()> {
        self.render_summary()?;
        writeln!(self.output, "{:<10} {:<20} {:>14}", "ID", "CUSTOMER", "TOTAL")?;
        for invoice in self.store.invoices() {
            writeln!(
                self.output,
                "{:<10} {:<20} {:>14}",
                invoice.id,
                invoice.customer_name,
                invoice.total_amount()
            )?;
        }
        Ok(())
    }

    fn render_detail(&mut self, id: &str) -> anyhow::Result<()> {
        let Some(invoice) = self.store.get(id) else {
            writeln!(self.output, "no invoice `{id}`")?;
            return Ok(());
        };
        let text = detail_text(invoice);
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

fn detail_text(invoice: &Invoice) -> String {
    format!(
        "id:       {}\ncustomer: {}\nproduct:  {}\nquantity: {}\nprice:    {}\ntotal:    {}\nstatus:   {}  ({} with `toggle {}`)",
        invoice.id,
        invoice.customer_name,
        invoice.product_name,
        invoice.quantity,
        invoice.price,
        invoice.total_amount(),
        invoice.status,
        invoice.status.toggle_action_label(),
        invoice.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicedesk_invoicing::InvoiceStatus;

    fn run_script(store: &mut InvoiceStore, script: &str) -> String {
        let mut output = Vec::new();
        Console::new(store, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn initial_render_lists_invoices_and_counts() {
        let mut store = InvoiceStore::seeded();
        let out = run_script(&mut store, "quit\n");
        assert!(out.contains("paid: 2  unpaid: 2"));
        assert!(out.contains("HD004"));
        assert!(out.contains("225000"));
    }

    #[test]
    fn add_with_defaults_for_bad_numbers() {
        let mut store = InvoiceStore::new();
        run_script(&mut store, "add\nHD010\nPham Van E\nProduct 10\nabc\nxyz\n\n");
        let added = store.get("HD010").unwrap();
        assert_eq!(added.quantity, 1);
        assert_eq!(added.price, 0);
        assert_eq!(added.status, InvoiceStatus::Unpaid);
    }

    #[test]
    fn duplicate_add_reports_error_and_keeps_store() {
        let mut store = InvoiceStore::seeded();
        let out = run_script(&mut store, "add\nHD001\nA\nB\n2\n10\n\nn\n");
        assert!(out.contains("error: validation failed: duplicate id `HD001`"));
        assert_eq!(store.invoices().len(), 4);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn rejected_form_can_be_corrected() {
        let mut store = InvoiceStore::new();
        // First attempt leaves the customer empty; second fills it in.
        let script = "add\nHD010\n\nProduct\n1\n5\n\ny\n\nFixed Name\n\n\n\n\n";
        let out = run_script(&mut store, script);
        assert!(out.contains("missing required field `customerName`"));
        assert_eq!(store.get("HD010").unwrap().customer_name, "Fixed Name");
    }

    #[test]
    fn edit_keeps_id_and_position() {
        let mut store = InvoiceStore::seeded();
        run_script(&mut store, "edit HD002\nNew Name\n\n3\n\n\n");
        let ids: Vec<_> = store.invoices().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["HD001", "HD002", "HD003", "HD004"]);
        let edited = store.get("HD002").unwrap();
        assert_eq!(edited.customer_name, "New Name");
        assert_eq!(edited.quantity, 3);
        assert_eq!(edited.price, 120_000);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut store = InvoiceStore::seeded();
        run_script(&mut store, "delete HD001\nn\n");
        assert!(store.get("HD001").is_some());

        run_script(&mut store, "delete HD001\ny\n");
        assert!(store.get("HD001").is_none());
    }

    #[test]
    fn toggle_shows_updated_detail() {
        let mut store = InvoiceStore::seeded();
        let out = run_script(&mut store, "toggle HD003\n");
        assert_eq!(store.get("HD003").unwrap().status, InvoiceStatus::Paid);
        assert!(out.contains("status:   Paid  (Mark as unpaid with `toggle HD003`)"));
    }

    #[test]
    fn ids_with_spaces_stay_reachable() {
        let mut store = InvoiceStore::new();
        let out = run_script(
            &mut store,
            "add\nHD 01\nA\nB\n1\n1\n\ntoggle HD 01\nshow HD 01\n",
        );
        assert!(!out.contains("no invoice"));
        assert_eq!(store.get("HD 01").unwrap().status, InvoiceStatus::Paid);

        run_script(&mut store, "delete HD 01\ny\n");
        assert!(store.get("HD 01").is_none());
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut store = InvoiceStore::seeded();
        let out = run_script(&mut store, "dance\n");
        assert!(out.contains("unknown command `dance`"));
    }

    #[test]
    fn json_dumps_collection() {
        let mut store = InvoiceStore::seeded();
        let out = run_script(&mut store, "json\n");
        assert!(out.contains("\"customerName\": \"Tran Thi B\""));
    }
}
