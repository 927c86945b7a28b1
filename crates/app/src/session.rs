//! One run of the storefront: catalog, cart and panel, driven by text commands.

use core::str::FromStr;

use thiserror::Error;

use shopcart_cart::{CartCommand, CartLedger};
use shopcart_catalog::{fetch_catalog, CatalogSource, FetchState, Product};
use shopcart_core::{DomainError, ProductId};
use shopcart_display::{render_badge, render_page, render_product, CartPanel, CartView};

pub const HELP: &str = "\
Commands:
  products | ls        show the catalog
  show <id>            show one product
  add <id>             put one of a product in the cart
  remove <id> | rm <id> take one of a product out of the cart
  cart | open          open the cart panel
  close                close the cart panel
  toggle               open or close the cart panel
  help                 this text
  quit | exit          leave
";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown command {0:?} (try `help`)")]
    UnknownCommand(String),
    #[error("`{0}` needs a product id")]
    MissingArgument(&'static str),
    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
    #[error(transparent)]
    InvalidId(#[from] DomainError),
    #[error("no product with id {0} in the catalog")]
    UnknownProduct(ProductId),
    #[error("catalog unavailable")]
    CatalogUnavailable,
}

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Products,
    Show(ProductId),
    Add(ProductId),
    Remove(ProductId),
    Open,
    Close,
    Toggle,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        let bare = |command: SessionCommand| -> Result<SessionCommand, SessionError> {
            match args.first() {
                Some(extra) => Err(SessionError::UnexpectedArgument(extra.to_string())),
                None => Ok(command),
            }
        };
        let id = |name: &'static str| -> Result<ProductId, SessionError> {
            match args.as_slice() {
                [] => Err(SessionError::MissingArgument(name)),
                [raw] => Ok(raw.parse::<ProductId>()?),
                [_, extra, ..] => Err(SessionError::UnexpectedArgument(extra.to_string())),
            }
        };

        match verb.as_str() {
            "products" | "ls" => bare(SessionCommand::Products),
            "show" => Ok(SessionCommand::Show(id("show")?)),
            "add" => Ok(SessionCommand::Add(id("add")?)),
            "remove" | "rm" => Ok(SessionCommand::Remove(id("remove")?)),
            "cart" | "open" => bare(SessionCommand::Open),
            "close" => bare(SessionCommand::Close),
            "toggle" => bare(SessionCommand::Toggle),
            "help" | "?" => bare(SessionCommand::Help),
            "quit" | "exit" => bare(SessionCommand::Quit),
            _ => Err(SessionError::UnknownCommand(line.trim().to_string())),
        }
    }
}

/// What the driver should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(String),
    Quit,
}

/// Session state. The ledger is replaced, never mutated, on every cart command.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: FetchState,
    ledger: CartLedger,
    panel: CartPanel,
    history: Vec<CartCommand>,
}

impl Session {
    /// Session over an already-resolved catalog, with an empty cart.
    pub fn new(catalog: FetchState) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Fetch the catalog once and open a session over the outcome.
    pub async fn start(source: &dyn CatalogSource) -> Self {
        let catalog = fetch_catalog(source).await;
        tracing::info!(
            products = catalog.products().map_or(0, <[Product]>::len),
            failed = catalog.is_failed(),
            "session started"
        );
        Self::new(catalog)
    }

    pub fn catalog(&self) -> &FetchState {
        &self.catalog
    }

    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    pub fn panel(&self) -> CartPanel {
        self.panel
    }

    /// Cart commands that changed the cart; replaying them rebuilds `ledger()`.
    pub fn history(&self) -> &[CartCommand] {
        &self.history
    }

    /// Full screen as it currently stands.
    pub fn render(&self) -> String {
        render_page(&self.catalog, &self.ledger, self.panel)
    }

    pub fn execute(&mut self, command: SessionCommand) -> Result<Outcome, SessionError> {
        tracing::debug!(?command, "session command");

        let text = match command {
            SessionCommand::Products => self.render(),
            SessionCommand::Show(id) => render_product(self.product(id)?),
            SessionCommand::Add(id) => {
                let product = self.product(id)?.clone();
                let title = product.title.clone();
                self.apply(CartCommand::Add(product));
                format!(
                    "Added {} ({} in cart)\n{}",
                    title,
                    self.ledger.amount_of(id),
                    self.cart_status()
                )
            }
            SessionCommand::Remove(id) => {
                let message = match self.ledger.get(id) {
                    Some(line) => format!("Removed one {}\n", line.title()),
                    None => format!("#{id} is not in the cart\n"),
                };
                if self.ledger.contains(id) {
                    self.apply(CartCommand::Remove(id));
                }
                format!("{message}{}", self.cart_status())
            }
            SessionCommand::Open => {
                self.panel.open();
                CartView::from_ledger(&self.ledger).render()
            }
            SessionCommand::Close => {
                self.panel.close();
                format!("Cart closed\n{}\n", render_badge(&self.ledger))
            }
            SessionCommand::Toggle => {
                if self.panel.toggle() {
                    CartView::from_ledger(&self.ledger).render()
                } else {
                    format!("Cart closed\n{}\n", render_badge(&self.ledger))
                }
            }
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Render(text))
    }

    fn product(&self, id: ProductId) -> Result<&Product, SessionError> {
        if self.catalog.products().is_none() {
            return Err(SessionError::CatalogUnavailable);
        }
        self.catalog.find(id).ok_or(SessionError::UnknownProduct(id))
    }

    fn apply(&mut self, command: CartCommand) {
        tracing::info!(
            command = command.command_type(),
            product_id = %command.product_id(),
            "cart command applied"
        );
        self.ledger = self.ledger.apply(&command);
        self.history.push(command);
    }

    /// Badge, plus the panel contents when it is open.
    fn cart_status(&self) -> String {
        let mut out = format!("{}\n", render_badge(&self.ledger));
        if self.panel.is_open() {
            out.push_str(&CartView::from_ledger(&self.ledger).render());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_catalog::InMemoryCatalog;
    use shopcart_core::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(ProductId::new(1), "Backpack", Money::from_cents(1000)),
            Product::new(ProductId::new(2), "T-Shirt", Money::from_cents(2230))
                .with_category("men's clothing"),
        ]
    }

    fn session() -> Session {
        Session::new(FetchState::Loaded(catalog()))
    }

    fn render(outcome: Outcome) -> String {
        match outcome {
            Outcome::Render(text) => text,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!("products".parse::<SessionCommand>(), Ok(SessionCommand::Products));
        assert_eq!("LS".parse::<SessionCommand>(), Ok(SessionCommand::Products));
        assert_eq!("add 3".parse::<SessionCommand>(), Ok(SessionCommand::Add(ProductId::new(3))));
        assert_eq!("  rm   4 ".parse::<SessionCommand>(), Ok(SessionCommand::Remove(ProductId::new(4))));
        assert_eq!("show 1".parse::<SessionCommand>(), Ok(SessionCommand::Show(ProductId::new(1))));
        assert_eq!("cart".parse::<SessionCommand>(), Ok(SessionCommand::Open));
        assert_eq!("exit".parse::<SessionCommand>(), Ok(SessionCommand::Quit));
    }

    #[test]
    fn parse_errors_are_specific() {
        assert_eq!(
            "add".parse::<SessionCommand>(),
            Err(SessionError::MissingArgument("add"))
        );
        assert!(matches!(
            "add one".parse::<SessionCommand>(),
            Err(SessionError::InvalidId(DomainError::InvalidId(_)))
        ));
        assert_eq!(
            "dance".parse::<SessionCommand>(),
            Err(SessionError::UnknownCommand("dance".to_string()))
        );
    }

    #[test]
    fn trailing_words_are_rejected() {
        assert_eq!(
            "add 1 2".parse::<SessionCommand>(),
            Err(SessionError::UnexpectedArgument("2".to_string()))
        );
        assert_eq!(
            "rm 4 please".parse::<SessionCommand>(),
            Err(SessionError::UnexpectedArgument("please".to_string()))
        );
        assert_eq!(
            "cart 3".parse::<SessionCommand>(),
            Err(SessionError::UnexpectedArgument("3".to_string()))
        );
        assert_eq!(
            "quit now".parse::<SessionCommand>(),
            Err(SessionError::UnexpectedArgument("now".to_string()))
        );
    }

    #[test]
    fn add_and_remove_update_ledger_and_badge() {
        let mut session = session();

        let out = render(session.execute(SessionCommand::Add(ProductId::new(1))).unwrap());
        assert_eq!(out, "Added Backpack (1 in cart)\nCart (1)\n");

        let out = render(session.execute(SessionCommand::Add(ProductId::new(1))).unwrap());
        assert_eq!(out, "Added Backpack (2 in cart)\nCart (2)\n");
        assert_eq!(session.ledger().total_price().to_string(), "20.00");

        let out = render(session.execute(SessionCommand::Remove(ProductId::new(1))).unwrap());
        assert_eq!(out, "Removed one Backpack\nCart (1)\n");
        assert_eq!(session.ledger().total_price().to_string(), "10.00");
    }

    #[test]
    fn remove_of_absent_product_is_not_an_error() {
        let mut session = session();
        let out = render(session.execute(SessionCommand::Remove(ProductId::new(99))).unwrap());
        assert_eq!(out, "#99 is not in the cart\nCart (0)\n");
        assert!(session.ledger().is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn add_of_unknown_product_is_rejected_without_touching_the_cart() {
        let mut session = session();
        assert_eq!(
            session.execute(SessionCommand::Add(ProductId::new(99))),
            Err(SessionError::UnknownProduct(ProductId::new(99)))
        );
        assert!(session.ledger().is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn catalog_dependent_commands_fail_without_catalog() {
        let mut session = Session::new(FetchState::Failed);
        assert_eq!(
            session.execute(SessionCommand::Add(ProductId::new(1))),
            Err(SessionError::CatalogUnavailable)
        );
        assert_eq!(
            session.execute(SessionCommand::Show(ProductId::new(1))),
            Err(SessionError::CatalogUnavailable)
        );
        assert_eq!(
            render(session.execute(SessionCommand::Products).unwrap()),
            "Something went wrong\n"
        );
    }

    #[test]
    fn open_panel_is_shown_after_cart_changes() {
        let mut session = session();
        let out = render(session.execute(SessionCommand::Open).unwrap());
        assert_eq!(out, "Your shopping cart\nNo items in cart\nTotal: $0.00\n");
        assert!(session.panel().is_open());

        let out = render(session.execute(SessionCommand::Add(ProductId::new(2))).unwrap());
        assert!(out.contains("Your shopping cart"));
        assert!(out.ends_with("Total: $22.30\n"));

        let out = render(session.execute(SessionCommand::Close).unwrap());
        assert_eq!(out, "Cart closed\nCart (1)\n");
        assert!(!session.panel().is_open());
    }

    #[test]
    fn toggle_flips_panel_without_touching_cart() {
        let mut session = session();
        session.execute(SessionCommand::Add(ProductId::new(1))).unwrap();
        let before = session.ledger().clone();

        let out = render(session.execute(SessionCommand::Toggle).unwrap());
        assert!(out.starts_with("Your shopping cart"));
        let out = render(session.execute(SessionCommand::Toggle).unwrap());
        assert!(out.starts_with("Cart closed"));

        assert_eq!(session.ledger(), &before);
    }

    #[test]
    fn history_replays_to_current_ledger() {
        let mut session = session();
        for command in ["add 1", "add 2", "add 1", "rm 2", "rm 7"] {
            session.execute(command.parse().unwrap()).unwrap();
        }

        assert_eq!(session.history().len(), 4);
        assert_eq!(&CartLedger::replay(session.history()), session.ledger());
    }

    #[test]
    fn removes_that_change_nothing_are_not_recorded() {
        let mut session = session();
        session.execute(SessionCommand::Add(ProductId::new(1))).unwrap();
        session.execute(SessionCommand::Remove(ProductId::new(1))).unwrap();
        assert_eq!(session.history().len(), 2);

        for _ in 0..3 {
            session.execute(SessionCommand::Remove(ProductId::new(1))).unwrap();
            session.execute(SessionCommand::Remove(ProductId::new(42))).unwrap();
        }
        assert_eq!(session.history().len(), 2);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn show_renders_product_card() {
        let mut session = session();
        let out = render(session.execute(SessionCommand::Show(ProductId::new(2))).unwrap());
        assert_eq!(out, "#2 T-Shirt\nCategory: men's clothing\nPrice: $22.30\n");
    }

    #[test]
    fn help_and_quit() {
        let mut session = session();
        assert!(render(session.execute(SessionCommand::Help).unwrap()).contains("add <id>"));
        assert_eq!(session.execute(SessionCommand::Quit), Ok(Outcome::Quit));
    }

    #[tokio::test]
    async fn start_fetches_catalog_once() {
        let session = Session::start(&InMemoryCatalog::new(catalog())).await;
        assert_eq!(session.catalog().products().map(|p| p.len()), Some(2));
        assert!(session.ledger().is_empty());
        assert!(!session.panel().is_open());

        let failed = Session::start(&InMemoryCatalog::failing()).await;
        assert!(failed.catalog().is_failed());
    }
}
