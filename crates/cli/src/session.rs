//! Interactive session state and command execution.

use std::collections::BTreeMap;

use thiserror::Error;

use stockroom_core::{Category, DomainError, DomainResult, Entity};
use stockroom_inventory::{InventoryConfig, InventoryStore, Item, RestockNotice};

use crate::command::{Command, parse_line};
use crate::sample::{self, WAREHOUSE_RESTOCK_THRESHOLD};

/// Inventory that is active when a session starts.
pub const PRIMARY_INVENTORY: &str = "main";

/// Secondary inventory seeded alongside the primary one.
pub const WAREHOUSE_INVENTORY: &str = "warehouse";

/// Lines to print, and whether the session ends.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub exit: bool,
}

impl Outcome {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, exit: false }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid category choice.")]
    InvalidCategoryChoice,

    #[error("Inventory not found: {0}")]
    UnknownInventory(String),

    #[error("Cannot merge inventory {0} into itself.")]
    SelfMerge(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Named inventories, one of them active.
///
/// The active inventory is held apart from the others so that a merge can
/// read its source while writing the active one. Every inventory created
/// during the session shares the session's category list; only the seeded
/// `warehouse` uses its own restock threshold.
#[derive(Debug, Clone)]
pub struct Session {
    config: InventoryConfig,
    active_name: String,
    active: InventoryStore,
    others: BTreeMap<String, InventoryStore>,
}

impl Session {
    /// A session with one empty inventory.
    pub fn new(config: InventoryConfig) -> DomainResult<Self> {
        let active = InventoryStore::new(config.clone())?;
        Ok(Self {
            config,
            active_name: PRIMARY_INVENTORY.to_string(),
            active,
            others: BTreeMap::new(),
        })
    }

    /// A session whose primary and warehouse inventories hold the sample
    /// items. Returns the notices raised while seeding the primary one.
    pub fn with_sample_data(config: InventoryConfig) -> DomainResult<(Self, Vec<RestockNotice>)> {
        let mut session = Self::new(config)?;
        let notices = sample::seed(&mut session.active)?;

        let mut warehouse = InventoryStore::new(
            session
                .config
                .clone()
                .with_restock_threshold(WAREHOUSE_RESTOCK_THRESHOLD),
        )?;
        sample::seed(&mut warehouse)?;
        session
            .others
            .insert(WAREHOUSE_INVENTORY.to_string(), warehouse);

        Ok((session, notices))
    }

    pub fn active_name(&self) -> &str {
        &self.active_name
    }

    pub fn active(&self) -> &InventoryStore {
        &self.active
    }

    pub fn inventory(&self, name: &str) -> Option<&InventoryStore> {
        if name == self.active_name {
            Some(&self.active)
        } else {
            self.others.get(name)
        }
    }

    /// Parse and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Outcome::default(),
            Err(err) => Outcome::lines(
                err.to_string()
                    .trim_end()
                    .lines()
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    /// Execute a parsed command. Failures become output lines; nothing here
    /// ends the session except `exit`.
    pub fn execute(&mut self, command: Command) -> Outcome {
        tracing::debug!(inventory = %self.active_name, ?command, "executing command");

        match self.try_execute(command) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!(error = %err, "command rejected");
                Outcome::lines(vec![err.to_string()])
            }
        }
    }

    fn try_execute(&mut self, command: Command) -> Result<Outcome, SessionError> {
        let outcome = match command {
            Command::Add {
                category,
                id,
                quantity,
                name,
            } => {
                let category = self.category_choice(category)?;
                let notice =
                    self.active
                        .add_or_update(id, name.join(" "), category.as_str(), quantity)?;
                with_notices(notice, "Item added/updated successfully.")
            }
            Command::Update { id, quantity } => {
                let notice = self.active.update_quantity(&id, quantity)?;
                with_notices(notice, "Stock updated successfully.")
            }
            Command::Delete { id } => {
                let removed = self.active.remove(&id)?;
                Outcome::lines(vec![format!(
                    "Item with ID: {} removed successfully.",
                    removed.id()
                )])
            }
            Command::View { category } => {
                let category = self.category_choice(category)?;
                let items = self.active.items_by_category(category.as_str());
                if items.is_empty() {
                    Outcome::lines(vec![format!("No items found in category: {category}")])
                } else {
                    listing(format!("Items in {category} category:"), &items)
                }
            }
            Command::Top { k } => {
                let items = self.active.top_k(usize::try_from(k).unwrap_or(0));
                listing(format!("Top {k} items by quantity:"), &items)
            }
            Command::List => {
                let items = self.active.all_items();
                if items.is_empty() {
                    Outcome::lines(vec![format!("Inventory {} is empty.", self.active_name)])
                } else {
                    listing(
                        format!("Inventory {} ({} items):", self.active_name, items.len()),
                        &items,
                    )
                }
            }
            Command::Categories => Outcome::lines(
                self.active
                    .categories()
                    .iter()
                    .enumerate()
                    .map(|(i, category)| format!("{}. {category}", i + 1))
                    .collect(),
            ),
            Command::Merge { inventory } => {
                if inventory == self.active_name {
                    return Err(SessionError::SelfMerge(inventory));
                }
                let other = self
                    .others
                    .get(&inventory)
                    .ok_or(SessionError::UnknownInventory(inventory))?;

                let notices = self.active.merge_from(other);
                let mut lines: Vec<String> = notices.iter().map(ToString::to_string).collect();
                lines.push("Inventory merged successfully.".to_string());
                Outcome::lines(lines)
            }
            Command::Open { inventory } => {
                if inventory == self.active_name {
                    return Ok(Outcome::lines(vec![format!(
                        "Already in inventory {inventory}."
                    )]));
                }

                let (next, line) = match self.others.remove(&inventory) {
                    Some(store) => (store, format!("Switched to inventory {inventory}.")),
                    None => (
                        InventoryStore::new(self.config.clone())?,
                        format!("Created and switched to inventory {inventory}."),
                    ),
                };

                let previous = std::mem::replace(&mut self.active, next);
                let previous_name = std::mem::replace(&mut self.active_name, inventory);
                self.others.insert(previous_name, previous);

                Outcome::lines(vec![line])
            }
            Command::Inventories => {
                let mut rows: Vec<(&str, usize, bool)> = self
                    .others
                    .iter()
                    .map(|(name, store)| (name.as_str(), store.len(), false))
                    .collect();
                rows.push((self.active_name.as_str(), self.active.len(), true));
                rows.sort_unstable_by_key(|(name, _, _)| *name);

                Outcome::lines(
                    rows.into_iter()
                        .map(|(name, len, active)| {
                            let marker = if active { '*' } else { ' ' };
                            format!("{marker} {name} ({len} items)")
                        })
                        .collect(),
                )
            }
            Command::Exit => Outcome {
                lines: vec!["Exiting program.".to_string()],
                exit: true,
            },
        };

        Ok(outcome)
    }

    /// Resolve a 1-based menu choice against the active category list.
    fn category_choice(&self, choice: usize) -> Result<Category, SessionError> {
        choice
            .checked_sub(1)
            .and_then(|index| self.active.categories().get(index))
            .cloned()
            .ok_or(SessionError::InvalidCategoryChoice)
    }
}

fn with_notices(notice: Option<RestockNotice>, done: &str) -> Outcome {
    let mut lines: Vec<String> = notice.iter().map(ToString::to_string).collect();
    lines.push(done.to_string());
    Outcome::lines(lines)
}

fn listing(header: String, items: &[Item]) -> Outcome {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(header);
    lines.extend(items.iter().map(ToString::to_string));
    Outcome::lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Session {
        Session::with_sample_data(InventoryConfig::default()).unwrap().0
    }

    fn run(session: &mut Session, line: &str) -> Vec<String> {
        session.handle_line(line).lines
    }

    #[test]
    fn seeding_reports_the_chair() {
        let (session, notices) = Session::with_sample_data(InventoryConfig::default()).unwrap();
        assert_eq!(session.active_name(), PRIMARY_INVENTORY);
        assert_eq!(session.active().len(), 5);
        assert_eq!(session.inventory(WAREHOUSE_INVENTORY).unwrap().len(), 5);
        assert_eq!(
            notices.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["Restock Notification: Item 104 (Chair) is below the threshold!"]
        );
    }

    #[test]
    fn add_prints_notice_before_confirmation() {
        let mut session = seeded();
        assert_eq!(
            run(&mut session, "add 2 200 3 Office Chair"),
            vec![
                "Restock Notification: Item 200 (Office Chair) is below the threshold!",
                "Item added/updated successfully.",
            ]
        );
        assert_eq!(session.active().get("200").unwrap().category().as_str(), "Furniture");
    }

    #[test]
    fn add_rejects_out_of_range_category() {
        let mut session = seeded();
        assert_eq!(run(&mut session, "add 4 200 3 Lamp"), vec!["Invalid category choice."]);
        assert_eq!(run(&mut session, "view 0"), vec!["Invalid category choice."]);
        assert!(!session.active().contains("200"));
    }

    #[test]
    fn update_and_delete() {
        let mut session = seeded();
        assert_eq!(run(&mut session, "update 105 120"), vec!["Stock updated successfully."]);
        assert_eq!(session.active().get("105").unwrap().quantity(), 120);

        assert_eq!(
            run(&mut session, "update 999 1"),
            vec!["item with ID: 999 not found"]
        );
        assert_eq!(
            run(&mut session, "update 105 -1"),
            vec!["invalid argument: quantity cannot be negative (got -1)"]
        );

        assert_eq!(
            run(&mut session, "delete 105"),
            vec!["Item with ID: 105 removed successfully."]
        );
        assert_eq!(run(&mut session, "delete 105"), vec!["item with ID: 105 not found"]);
    }

    #[test]
    fn view_category_lists_highest_first() {
        let mut session = seeded();
        assert_eq!(
            run(&mut session, "view 2"),
            vec![
                "Items in Furniture category:",
                "ID: 103, Name: Table, Category: Furniture, Quantity: 20",
                "ID: 104, Name: Chair, Category: Furniture, Quantity: 5",
            ]
        );

        run(&mut session, "delete 105");
        assert_eq!(
            run(&mut session, "view 3"),
            vec!["No items found in category: Groceries"]
        );
    }

    #[test]
    fn top_k() {
        let mut session = seeded();
        assert_eq!(
            run(&mut session, "top 3"),
            vec![
                "Top 3 items by quantity:",
                "ID: 105, Name: Rice, Category: Groceries, Quantity: 100",
                "ID: 101, Name: Laptop, Category: Electronics, Quantity: 50",
                "ID: 102, Name: Phone, Category: Electronics, Quantity: 30",
            ]
        );
        assert_eq!(run(&mut session, "top -2"), vec!["Top -2 items by quantity:"]);
    }

    #[test]
    fn merge_warehouse_changes_nothing_for_identical_stock() {
        let mut session = seeded();
        let before = session.active().all_items();
        assert_eq!(
            run(&mut session, "merge warehouse"),
            vec!["Inventory merged successfully."]
        );
        assert_eq!(session.active().all_items(), before);
    }

    #[test]
    fn merge_pulls_higher_quantities_from_other_inventory() {
        let mut session = seeded();
        run(&mut session, "open backroom");
        run(&mut session, "add 2 104 40 Chair");
        run(&mut session, "add 1 300 2 Cable");
        run(&mut session, "open main");

        assert_eq!(
            run(&mut session, "merge backroom"),
            vec![
                "Restock Notification: Item 300 (Cable) is below the threshold!",
                "Inventory merged successfully.",
            ]
        );
        assert_eq!(session.active().get("104").unwrap().quantity(), 40);
        assert_eq!(session.inventory("backroom").unwrap().len(), 2);
    }

    #[test]
    fn merge_errors() {
        let mut session = seeded();
        assert_eq!(
            run(&mut session, "merge main"),
            vec!["Cannot merge inventory main into itself."]
        );
        assert_eq!(
            run(&mut session, "merge attic"),
            vec!["Inventory not found: attic"]
        );
    }

    #[test]
    fn open_and_list_inventories() {
        let mut session = seeded();
        assert_eq!(
            run(&mut session, "open backroom"),
            vec!["Created and switched to inventory backroom."]
        );
        assert_eq!(run(&mut session, "list"), vec!["Inventory backroom is empty."]);
        assert_eq!(
            run(&mut session, "inventories"),
            vec!["* backroom (0 items)", "  main (5 items)", "  warehouse (5 items)"]
        );
        assert_eq!(
            run(&mut session, "open main"),
            vec!["Switched to inventory main."]
        );
        assert_eq!(run(&mut session, "list")[0], "Inventory main (5 items):");
    }

    #[test]
    fn categories_are_numbered() {
        let mut session = seeded();
        assert_eq!(
            run(&mut session, "categories"),
            vec!["1. Electronics", "2. Furniture", "3. Groceries"]
        );
    }

    #[test]
    fn parse_errors_do_not_end_the_session() {
        let mut session = seeded();
        let outcome = session.handle_line("sell 101");
        assert!(!outcome.exit);
        assert!(!outcome.lines.is_empty());
        assert_eq!(session.handle_line(""), Outcome::default());
    }

    #[test]
    fn exit_ends_the_session() {
        let mut session = Session::new(InventoryConfig::default()).unwrap();
        let outcome = session.handle_line("exit");
        assert!(outcome.exit);
        assert_eq!(outcome.lines, vec!["Exiting program."]);
    }
}
