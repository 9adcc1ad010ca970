//! Binary entry point of the treewalk demo.
//!
//! Prints the values of the sample tree (see [treewalk::dummy]) in every
//! representation and traversal order, one line per combination.
//!
//! ```bash
//! # Everything
//! treewalk
//!
//! # Only postorder of the linked tree, through the object-style interface
//! treewalk --order post --representation linked --facade
//! ```

use std::io;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, error};

use treewalk::{
    dummy, print_iterable, print_tree_ordered,
    tree::{
        document::{self, Document},
        linked,
        pair::{self, PairTree},
    },
    Order, TreewalkError,
};

/// Prints a tree in preorder, postorder and level-order.
#[derive(Parser, Debug)]
#[command(name = "treewalk", version, about = "Generic tree traversal demo")]
struct Cli {
    /// Traversal order to print (repeatable, default: all)
    #[arg(long, value_enum)]
    order: Vec<OrderArg>,

    /// Tree representation to traverse (repeatable, default: all)
    #[arg(long, value_enum)]
    representation: Vec<Representation>,

    /// Traverse through the `TreeIterable` adapters instead of the free functions
    #[arg(long)]
    facade: bool,

    /// Log level (overridden by `RUST_LOG`)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Pre,
    Post,
    Level,
}

impl From<OrderArg> for Order {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Pre => Order::PreOrder,
            OrderArg::Post => Order::PostOrder,
            OrderArg::Level => Order::LevelOrder,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Representation {
    /// Nested `(value, children)` pairs
    Pair,
    /// Parsed markup
    Document,
    /// First-child/next-sibling links
    Linked,
}

impl Representation {
    const ALL: [Representation; 3] = [Representation::Pair, Representation::Document, Representation::Linked];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Demo failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing subscriber. Logs go to stderr, stdout carries the traversals.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn execute(cli: &Cli) -> Result<(), TreewalkError> {
    let orders: Vec<Order> = if cli.order.is_empty() {
        Order::ALL.to_vec()
    } else {
        cli.order.iter().copied().map(Order::from).collect()
    };
    let representations = if cli.representation.is_empty() {
        Representation::ALL.to_vec()
    } else {
        cli.representation.clone()
    };

    let pair_tree = dummy::pair_tree();
    let linked_tree = dummy::linked_tree();
    let markup_tree = Document::parse(dummy::MARKUP)?;
    let wrapped_pair_tree = PairTree::from(pair_tree.clone());

    for representation in representations {
        debug!(?representation, facade = cli.facade, "Printing representation");
        for &order in &orders {
            match (representation, cli.facade) {
                (Representation::Pair, false) => print_tree_ordered(&pair_tree, pair::value, pair::children, order)?,
                (Representation::Pair, true) => print_iterable(&wrapped_pair_tree, order)?,
                (Representation::Document, false) => {
                    print_tree_ordered(markup_tree.root(), document::value, document::children, order)?
                }
                (Representation::Document, true) => print_iterable(&markup_tree, order)?,
                (Representation::Linked, false) => {
                    print_tree_ordered(&linked_tree, linked::value, linked::children, order)?
                }
                (Representation::Linked, true) => print_iterable(&linked_tree, order)?,
            }
        }
    }
    Ok(())
}
