use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use cli::{BackendClient, CliError};
use wire::{DEFAULT_BACKEND_URL, NewPage};

#[derive(Parser, Debug)]
#[command(name = "lcnc-cli", about = "Builder backend CLI")]
struct Cli {
    #[arg(long, env = "LCNC_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    #[arg(long, env = "LCNC_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "LCNC_PASSWORD")]
        password: String,
    },
    Pages(PagesCommand),
    Widgets(WidgetsCommand),
    Tables(TablesCommand),
    Relationships,
}

#[derive(Args, Debug)]
struct PagesCommand {
    #[command(subcommand)]
    command: PagesSubcommand,
}

#[derive(Subcommand, Debug)]
enum PagesSubcommand {
    List,
    Get {
        page_id: i64,
    },
    Create {
        name: String,
        #[arg(long, default_value = "#0a0a0a")]
        background: String,
    },
    Delete {
        page_id: i64,
    },
}

#[derive(Args, Debug)]
struct WidgetsCommand {
    #[command(subcommand)]
    command: WidgetsSubcommand,
}

#[derive(Subcommand, Debug)]
enum WidgetsSubcommand {
    List { page_id: i64 },
    Delete { widget_id: i64 },
}

#[derive(Args, Debug)]
struct TablesCommand {
    #[command(subcommand)]
    command: TablesSubcommand,
}

#[derive(Subcommand, Debug)]
enum TablesSubcommand {
    List,
    /// Apply a table definition to the physical database.
    Sync { table_id: i64 },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = BackendClient::new(cli.backend_url, cli.token);

    match cli.command {
        Command::Login { email, password } => {
            let auth = client.sign_in(&email, &password).await?;
            println!("{}", auth.jwt);
            Ok(())
        }
        Command::Pages(pages) => run_pages(&client, pages).await,
        Command::Widgets(widgets) => run_widgets(&client, widgets).await,
        Command::Tables(tables) => run_tables(&client, tables).await,
        Command::Relationships => print_json(&client.list_relationships().await?),
    }
}

async fn run_pages(client: &BackendClient, pages: PagesCommand) -> Result<(), CliError> {
    match pages.command {
        PagesSubcommand::List => print_json(&client.list_pages().await?),
        PagesSubcommand::Get { page_id } => print_json(&client.get_page(page_id).await?),
        PagesSubcommand::Create { name, background } => {
            let page = NewPage { name, background_color: Some(background) };
            print_text(&client.create_page(&page).await?);
            Ok(())
        }
        PagesSubcommand::Delete { page_id } => {
            print_text(&client.delete_page(page_id).await?);
            Ok(())
        }
    }
}

async fn run_widgets(client: &BackendClient, widgets: WidgetsCommand) -> Result<(), CliError> {
    match widgets.command {
        WidgetsSubcommand::List { page_id } => print_json(&client.list_widgets(page_id).await?),
        WidgetsSubcommand::Delete { widget_id } => {
            print_text(&client.delete_widget(widget_id).await?);
            Ok(())
        }
    }
}

async fn run_tables(client: &BackendClient, tables: TablesCommand) -> Result<(), CliError> {
    match tables.command {
        TablesSubcommand::List => print_json(&client.list_tables().await?),
        TablesSubcommand::Sync { table_id } => {
            print_text(&client.sync_table(table_id).await?);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn print_text(text: &str) {
    if text.trim().is_empty() {
        println!("ok");
    } else {
        println!("{}", text.trim());
    }
}
