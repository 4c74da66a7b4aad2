use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    error::{Error, Result},
    order::{self, Receipt},
    storage::{Category, Config, Inventory, Item},
};

use super::{
    commands::{Command, MENU},
    input::Input,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

/// Warehouse state for one run of the program.
///
/// Owns the inventory and the receipt counter; every command goes through it.
pub struct Session {
    config_path: PathBuf,
    config: Config,
    inventory: Inventory,
    state: State,
}

impl Session {
    pub fn new(config_path: PathBuf, config: Config, inventory: Inventory) -> Self {
        Self {
            config_path,
            config,
            inventory,
            state: State::Running,
        }
    }

    /// Loads the configuration at `config_path` and the database it points to
    pub fn open(config_path: PathBuf) -> Result<Self> {
        let config = Config::load(&config_path)?;
        let inventory = Inventory::load(&config.db)?;
        Ok(Self::new(config_path, config, inventory))
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn terminate(&mut self) {
        self.state = State::Terminated;
    }

    pub fn update_stock(&mut self, id: i32, delta: i64) -> Result<()> {
        self.inventory.adjust_quantity(id, delta)
    }

    /// Fills the order at `path` and bumps the receipt counter.
    ///
    /// Nothing is touched when the counter has no next value.
    pub fn process_order(&mut self, path: &Path) -> Result<Receipt> {
        let number = self.config.receipt;
        let next = number
            .checked_add(1)
            .ok_or(Error::ReceiptOverflow(number))?;

        let receipt = order::process_file(&mut self.inventory, path, number)?;
        self.config.receipt = next;
        Ok(receipt)
    }

    pub fn category(&self, category: Category) -> Vec<Item> {
        self.inventory.by_category(category)
    }

    /// Writes the database, then the configuration with the current receipt counter
    pub fn save(&self) -> Result<()> {
        self.inventory.save(&self.config.db)?;
        self.config.save(&self.config_path)?;
        info!(
            "saved session to {} (receipt counter {})",
            self.config_path.display(),
            self.config.receipt
        );
        Ok(())
    }

    /// Runs the menu loop until the user quits or the input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut out: W) -> Result<()> {
        let mut input = Input::new(reader);

        while self.state == State::Running {
            write!(out, "{MENU}")?;
            out.flush()?;

            let Some(token) = input.token()? else {
                info!("input closed; leaving without saving");
                self.terminate();
                break;
            };

            let result: std::result::Result<Command, _> = token.as_str().try_into();
            match result {
                Ok(command) => command.execute(self, &mut input, &mut out)?,
                Err(e) => {
                    debug!("{e}");
                    input.discard_line();
                }
            }
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    const DATABASE: &str = "\
id,name,price,quantity,category
1,Aspirin,500,10,Painkiller
2,Ibuprofen,350,4,Painkiller
3,Amoxicillin,1299,40,Antibiotic
";

    struct Fixture {
        dir: tempfile::TempDir,
        config_path: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let db = dir.path().join("items.csv");
            let config_path = dir.path().join("pharma.cfg");

            fs::write(&db, DATABASE).unwrap();
            fs::write(&config_path, format!("receipt=42\ndb={}\n", db.display())).unwrap();

            Self { dir, config_path }
        }

        fn session(&self) -> Session {
            Session::open(self.config_path.clone()).unwrap()
        }

        fn run(&self, session: &mut Session, input: &str) -> String {
            let mut out = Vec::new();
            session.run(input.as_bytes(), &mut out).unwrap();
            String::from_utf8(out).unwrap()
        }
    }

    #[test]
    fn opens_from_config() {
        let fixture = Fixture::new();
        let session = fixture.session();

        assert_eq!(session.config.receipt, 42);
        assert_eq!(session.inventory().len(), 3);
        assert_eq!(session.config.db, fixture.dir.path().join("items.csv"));
        assert_eq!(session.state, State::Running);
    }

    #[test]
    fn open_reports_missing_database() {
        let fixture = Fixture::new();
        fs::remove_file(fixture.dir.path().join("items.csv")).unwrap();

        let err = Session::open(fixture.config_path.clone()).err().unwrap();
        assert!(matches!(err, Error::DatabaseOpen { .. }));
    }

    #[test]
    fn update_stock_clamps() {
        let fixture = Fixture::new();
        let mut session = fixture.session();

        let out = fixture.run(&mut session, "u 1 -15\nu 9 1\nu x 1\nq n\n");

        assert!(out.contains("Stock updated successfully!"));
        assert!(out.contains("Item not found!"));
        assert!(out.contains("Invalid input."));
        assert!(out.contains("Quit without saving."));
        assert_eq!(session.inventory().get(1).unwrap().quantity, 0);
        assert_eq!(session.state, State::Terminated);
    }

    #[test]
    fn order_prints_receipt_and_bumps_counter() {
        let fixture = Fixture::new();
        let order = fixture.dir.path().join("order.txt");
        fs::write(&order, "1 3\n7 5\n").unwrap();
        let mut session = fixture.session();

        let out = fixture.run(&mut session, &format!("p {}\nq n\n", order.display()));

        assert!(out.contains("Receipt #42"));
        assert!(out.contains("**NO STOCK**"));
        assert!(out.contains("$15.00"));
        assert_eq!(session.config.receipt, 43);
        assert_eq!(session.inventory().get(1).unwrap().quantity, 7);
    }

    #[test]
    fn missing_order_keeps_counter() {
        let fixture = Fixture::new();
        let mut session = fixture.session();

        let out = fixture.run(&mut session, "p /nonexistent/order.txt\nq n\n");

        assert!(out.contains("error: cannot open order file"));
        assert_eq!(session.config.receipt, 42);
    }

    #[test]
    fn exhausted_receipt_counter_is_reported() {
        let fixture = Fixture::new();
        let order = fixture.dir.path().join("order.txt");
        fs::write(&order, "1 1\n").unwrap();
        let mut session = fixture.session();
        session.config.receipt = u32::MAX;

        let err = session.process_order(&order).unwrap_err();
        assert!(matches!(err, Error::ReceiptOverflow(u32::MAX)));
        assert_eq!(session.config.receipt, u32::MAX);
        assert_eq!(session.inventory().get(1).unwrap().quantity, 10);

        let out = fixture.run(&mut session, &format!("p {}\nq n\n", order.display()));
        assert!(out.contains("error: receipt counter is exhausted"));
    }

    #[test]
    fn last_receipt_number_is_usable() {
        let fixture = Fixture::new();
        let order = fixture.dir.path().join("order.txt");
        fs::write(&order, "1 1\n").unwrap();
        let mut session = fixture.session();
        session.config.receipt = u32::MAX - 1;

        let receipt = session.process_order(&order).unwrap();
        assert_eq!(receipt.number, u32::MAX - 1);
        assert_eq!(session.config.receipt, u32::MAX);
    }

    #[test]
    fn invalid_id_does_not_swallow_next_command() {
        let fixture = Fixture::new();
        let mut session = fixture.session();

        let out = fixture.run(&mut session, "u x\ns\nq n\n");

        assert!(out.contains("Invalid input."));
        assert!(out.contains("|1     |Aspirin"));
        assert_eq!(out.matches("WAREHOUSE MANAGER").count(), 3);
    }

    #[test]
    fn category_listing_sorted() {
        let fixture = Fixture::new();
        let mut session = fixture.session();

        let out = fixture.run(&mut session, "c Painkiller\nq n\n");

        let ibuprofen = out.find("Ibuprofen").unwrap();
        let aspirin = out.find("Aspirin").unwrap();
        assert!(ibuprofen < aspirin);
        assert!(!out.contains("Amoxicillin"));
    }

    #[test]
    fn unknown_commands_are_ignored() {
        let fixture = Fixture::new();
        let mut session = fixture.session();

        let out = fixture.run(&mut session, "x u 1 5\nQ n\n");

        assert_eq!(out.matches("WAREHOUSE MANAGER").count(), 2);
        assert!(!out.contains("Stock updated"));
        assert_eq!(session.inventory().get(1).unwrap().quantity, 10);
    }

    #[test]
    fn end_of_input_terminates() {
        let fixture = Fixture::new();
        let mut session = fixture.session();

        fixture.run(&mut session, "s\n");
        assert_eq!(session.state, State::Terminated);
    }

    #[test]
    fn write_persists_database_and_config() {
        let fixture = Fixture::new();
        let order = fixture.dir.path().join("order.txt");
        fs::write(&order, "3 1").unwrap();
        let mut session = fixture.session();

        let out = fixture.run(
            &mut session,
            &format!("u 2 -1\np {}\nw\nq n\n", order.display()),
        );
        assert!(out.contains("Database Saved!"));

        let reloaded = fixture.session();
        assert_eq!(reloaded.config.receipt, 43);
        assert_eq!(reloaded.inventory().get(2).unwrap().quantity, 3);
        assert_eq!(reloaded.inventory().get(3).unwrap().quantity, 39);

        let config = fs::read_to_string(&fixture.config_path).unwrap();
        assert!(config.starts_with("db="));
        assert!(config.ends_with("receipt=43\n"));
    }

    #[test]
    fn quit_with_save() {
        let fixture = Fixture::new();
        let mut session = fixture.session();

        let out = fixture.run(&mut session, "u 3 10\nq Y\n");
        assert!(out.contains("Database Saved!"));
        assert_eq!(fixture.session().inventory().get(3).unwrap().quantity, 50);
    }

    #[test]
    fn save_failure_is_reported() {
        let fixture = Fixture::new();
        let mut session = fixture.session();
        fs::remove_dir_all(fixture.dir.path()).unwrap();

        let out = fixture.run(&mut session, "w\nq n\n");
        assert!(out.contains("error: cannot save"));
        assert_eq!(session.state, State::Terminated);
    }
}
