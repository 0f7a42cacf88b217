//! # Shell
//!
//! Line-oriented front end: each input line is one shopper action (a click
//! in the web version), dispatched to a command. The page is redrawn
//! whenever the cart store reports a change or the route moves.
//!
//! ## Actions
//! ```text
//! add <id> [qty]     Add to bag             remove <id>     Trash icon
//! qty <id> <n>       Quantity stepper       bag             Bag icon (toggle)
//! close              Close the bag          clear           Empty the bag
//! go <path>          Follow a link          menu            Mobile menu button
//! products [cat]     List the catalog       product <id>    Product details
//! show [--json]      Redraw / dump cart     help            This text
//! quit               Leave
//! ```

use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::error::{ApiError, AppError};
use crate::Storefront;

pub const HELP: &str = "\
Actions:
  add <id> [qty]    add a product to the bag
  remove <id>       remove a product from the bag
  qty <id> <n>      set a line's quantity (0 removes it)
  bag               open or close the bag
  close             close the bag
  clear             empty the bag
  go <path>         follow a link, e.g. go /skincare
  menu              open or close the mobile menu
  products [cat]    list products, optionally one category
  product <id>      show one product's details
  show [--json]     redraw the page, or print the bag as JSON
  help              show this text
  quit              leave the store
";

const PROMPT: &[u8] = b"> ";

// =============================================================================
// Action
// =============================================================================

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add { product_id: String, quantity: Option<i64> },
    Remove { product_id: String },
    SetQuantity { product_id: String, quantity: i64 },
    ToggleCart,
    CloseCart,
    ClearCart,
    Go { path: String },
    ToggleMenu,
    Products { category: Option<String> },
    Product { product_id: String },
    Show { json: bool },
    Help,
    Quit,
}

fn parse_quantity(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation(format!("quantity must be a whole number, got {:?}", raw)))
}

fn required<'a>(arg: Option<&'a str>, what: &str, usage: &str) -> Result<&'a str, ApiError> {
    arg.ok_or_else(|| ApiError::validation(format!("missing {}; usage: {}", what, usage)))
}

impl FromStr for Action {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let first = words.next();
        let second = words.next();

        if words.next().is_some() {
            return Err(ApiError::validation("too many arguments; try `help`"));
        }

        let action = match verb.as_str() {
            "add" => Action::Add {
                product_id: required(first, "product id", "add <id> [qty]")?.to_string(),
                quantity: second.map(parse_quantity).transpose()?,
            },
            "remove" | "rm" => Action::Remove {
                product_id: required(first, "product id", "remove <id>")?.to_string(),
            },
            "qty" => Action::SetQuantity {
                product_id: required(first, "product id", "qty <id> <n>")?.to_string(),
                quantity: parse_quantity(required(second, "quantity", "qty <id> <n>")?)?,
            },
            "bag" | "cart" => Action::ToggleCart,
            "close" => Action::CloseCart,
            "clear" => Action::ClearCart,
            "go" => Action::Go {
                path: first.unwrap_or("/").to_string(),
            },
            "menu" => Action::ToggleMenu,
            "products" | "ls" => Action::Products {
                category: first.map(str::to_string),
            },
            "product" => Action::Product {
                product_id: required(first, "product id", "product <id>")?.to_string(),
            },
            "show" => Action::Show {
                json: match first {
                    None => false,
                    Some("--json") => true,
                    Some(other) => {
                        return Err(ApiError::validation(format!("unknown flag {:?}", other)))
                    }
                },
            },
            "help" | "?" => Action::Help,
            "quit" | "exit" => Action::Quit,
            other => {
                return Err(ApiError::validation(format!(
                    "unknown action {:?}; try `help`",
                    other
                )))
            }
        };

        // Zero-argument actions take nothing.
        let takes_args = matches!(
            action,
            Action::Add { .. }
                | Action::Remove { .. }
                | Action::SetQuantity { .. }
                | Action::Go { .. }
                | Action::Products { .. }
                | Action::Product { .. }
                | Action::Show { .. }
        );
        if !takes_args && first.is_some() {
            return Err(ApiError::validation(format!("`{}` takes no arguments", verb)));
        }
        let single_arg = matches!(
            action,
            Action::Remove { .. }
                | Action::Go { .. }
                | Action::Products { .. }
                | Action::Product { .. }
                | Action::Show { .. }
        );
        if single_arg && second.is_some() {
            return Err(ApiError::validation(format!("`{}` takes one argument", verb)));
        }

        Ok(action)
    }
}

// =============================================================================
// Reply
// =============================================================================

/// What the shell should print after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Redraw the page.
    Page,
    /// Print this text.
    Text(String),
    /// Nothing to print beyond what change notifications trigger.
    Nothing,
    Quit,
}

// =============================================================================
// Session Loop
// =============================================================================

/// Runs the interactive session until `quit` or end of input.
pub async fn run_session<R, W>(storefront: &Storefront, input: R, mut output: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(storefront.render().as_bytes()).await?;
    output.write_all(PROMPT).await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            output.write_all(PROMPT).await?;
            output.flush().await?;
            continue;
        }

        debug!(input = %line, "shell action");
        let reply = line.parse::<Action>().and_then(|action| storefront.dispatch(action));

        let mut text = String::new();
        match reply {
            Ok(Reply::Quit) => break,
            Ok(Reply::Page) => {
                storefront.take_dirty();
                text.push_str(&storefront.render());
            }
            Ok(Reply::Text(body)) => {
                text.push_str(&body);
                if !body.ends_with('\n') {
                    text.push('\n');
                }
            }
            Ok(Reply::Nothing) => {}
            Err(err) => {
                warn!(code = ?err.code, message = %err.message, "action rejected");
                text.push_str(&format!("! {}\n", err.message));
            }
        }

        // The cart store told us something changed: redraw.
        if storefront.take_dirty() {
            text.push_str(&storefront.render());
        }

        output.write_all(text.as_bytes()).await?;
        output.write_all(PROMPT).await?;
        output.flush().await?;
    }

    info!("session ended");
    output.write_all(b"\nThanks for visiting.\n").await?;
    output.flush().await?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CatalogState, ConfigState};
    use glow_core::Catalog;

    fn storefront() -> Storefront {
        Storefront::new(ConfigState::default(), CatalogState::new(Catalog::builtin()))
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            "add glow-cushion".parse::<Action>().unwrap(),
            Action::Add {
                product_id: "glow-cushion".to_string(),
                quantity: None
            }
        );
        assert_eq!(
            "ADD glow-cushion 3".parse::<Action>().unwrap(),
            Action::Add {
                product_id: "glow-cushion".to_string(),
                quantity: Some(3)
            }
        );
        assert_eq!(
            "qty glow-cushion 0".parse::<Action>().unwrap(),
            Action::SetQuantity {
                product_id: "glow-cushion".to_string(),
                quantity: 0
            }
        );
        assert_eq!("go".parse::<Action>().unwrap(), Action::Go { path: "/".to_string() });
        assert_eq!("show --json".parse::<Action>().unwrap(), Action::Show { json: true });
        assert_eq!("bag".parse::<Action>().unwrap(), Action::ToggleCart);
        assert_eq!(
            "product glow-cushion".parse::<Action>().unwrap(),
            Action::Product {
                product_id: "glow-cushion".to_string()
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("add".parse::<Action>().is_err());
        assert!("qty glow-cushion".parse::<Action>().is_err());
        assert!("qty glow-cushion many".parse::<Action>().is_err());
        assert!("bag now".parse::<Action>().is_err());
        assert!("remove a b".parse::<Action>().is_err());
        assert!("dance".parse::<Action>().is_err());
        assert!("add a 1 2".parse::<Action>().is_err());
        assert!("product".parse::<Action>().is_err());
        assert!("product a b".parse::<Action>().is_err());
    }

    #[tokio::test]
    async fn test_session_scenario() {
        let storefront = storefront();
        let input: &[u8] = b"add glow-sheet-mask\nadd glow-sheet-mask 2\nbag\nqty glow-sheet-mask 0\nquit\nadd glow-cushion\n";
        let mut output = Vec::new();

        run_session(&storefront, input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("[bag 3]"));
        assert!(text.contains("Shopping Bag (3)"));
        assert!(text.contains("$37.50"));
        assert!(text.contains("Your bag is empty"));
        assert!(text.ends_with("Thanks for visiting.\n"));

        // Nothing after `quit` ran.
        assert_eq!(storefront.cart().with_cart(|c| c.item_count()), 0);
    }

    #[tokio::test]
    async fn test_session_reports_errors_and_continues() {
        let storefront = storefront();
        let input: &[u8] = b"add nope\nadd glow-lip-tint 500\nadd glow-lip-tint\n";
        let mut output = Vec::new();

        run_session(&storefront, input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("! Product not found: nope"));
        assert!(text.contains("! quantity must be between 1 and 99"));
        assert_eq!(storefront.cart().with_cart(|c| c.item_count()), 1);
    }

    #[tokio::test]
    async fn test_product_details() {
        let storefront = storefront();
        let input: &[u8] = b"product glow-cushion\nproduct glow-404\n";
        let mut output = Vec::new();

        run_session(&storefront, input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Dewy Cushion Foundation"));
        assert!(text.contains("  category  Makeup"));
        assert!(text.contains("  price     $32.00"));
        assert!(text.contains("! Product not found: glow-404"));
    }

    #[tokio::test]
    async fn test_json_dump() {
        let storefront = storefront();
        let input: &[u8] = b"add glow-rice-toner 2\nshow --json\n";
        let mut output = Vec::new();

        run_session(&storefront, input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"itemCount\": 2"));
        assert!(text.contains("\"subtotal\": 3600"));
    }
}
