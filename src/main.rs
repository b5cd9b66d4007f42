//! Demo binary: walks the Book CRUD flows against the in-memory
//! gateway and prints each rendered view model.

use anyhow::Context;
use clap::Parser;

use storefront::catalog::book::screens::FormField;
use storefront::{InMemoryGateway, ScreenHost, Translator};

#[derive(Parser)]
#[command(name = "storefront", about = "Book CRUD screen set demo")]
struct Args {
    /// Path to a JSON translation bundle; inline English is used when
    /// omitted.
    #[arg(long)]
    translations: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront::logging::init_tracing();
    let args = Args::parse();

    let i18n = match &args.translations {
        Some(path) => Translator::from_file(path)
            .with_context(|| format!("loading translations from {}", path.display()))?,
        None => Translator::empty(),
    };

    let mut host = ScreenHost::new(InMemoryGateway::new(), i18n);

    println!("== empty list ==");
    host.open("/book").await?;
    println!("{:#?}", host.render()?);

    println!("== create form ==");
    host.open("/book/new").await?;
    host.field_input(FormField::Name, "Dune");
    host.field_input(FormField::Description, "Spice and sandworms");
    host.field_input(FormField::Price, "12.5");
    host.submit().await?;
    println!("saved; now at {}", host.location().href());
    println!("{:#?}", host.render()?);

    println!("== detail ==");
    host.open("/book/1").await?;
    println!("{:#?}", host.render()?);

    println!("== edit ==");
    host.open("/book/1/edit").await?;
    host.field_input(FormField::Price, "15.0");
    host.submit().await?;
    println!("{:#?}", host.render()?);

    println!("== delete ==");
    host.open("/book/1/delete").await?;
    println!("{:#?}", host.render()?);
    host.confirm_delete().await?;
    println!("deleted; now at {}", host.location().href());
    println!("{:#?}", host.render()?);

    Ok(())
}
