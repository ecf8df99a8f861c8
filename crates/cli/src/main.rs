use anyhow::{bail, Context};
use bookhaven_catalog::{query, Book, Catalog, Criteria, Discount, PriceRange, SortKey};
use bookhaven_kernel::settings::Settings;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bookhaven", version, about = "Bookhaven catalog service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP API
    Serve,
    /// Filter and sort the catalog
    Browse(BrowseArgs),
    /// Show a single book
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct BrowseArgs {
    /// Case-insensitive text matched against title, author, and description
    #[arg(short, long)]
    query: Option<String>,
    /// Restrict to a category; repeat for several
    #[arg(short, long = "category")]
    categories: Vec<String>,
    #[arg(long)]
    min_price: Option<f64>,
    #[arg(long)]
    max_price: Option<f64>,
    #[arg(long)]
    in_stock: bool,
    #[arg(long)]
    bestsellers: bool,
    #[arg(long)]
    new_releases: bool,
    /// relevance, price-low, price-high, rating, newest, or title
    #[arg(short, long, default_value = "relevance")]
    sort: String,
    #[arg(long)]
    json: bool,
}

impl BrowseArgs {
    fn criteria(&self) -> Criteria {
        Criteria {
            text: self.query.clone().unwrap_or_default(),
            categories: self.categories.iter().cloned().collect(),
            price: PriceRange::from_dollars(self.min_price, self.max_price),
            in_stock_only: self.in_stock,
            bestsellers_only: self.bestsellers,
            new_releases_only: self.new_releases,
            sort: SortKey::parse_or_default(&self.sort),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::seeded();

    match cli.command {
        Command::Serve => serve(),
        Command::Browse(args) => browse(catalog, &args),
        Command::Show { id, json } => show(catalog, &id, json),
    }
}

fn serve() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load Bookhaven settings")?;
    bookhaven_telemetry::init(&settings.telemetry)?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(bookhaven_app::serve(&settings))
}

fn browse(catalog: &Catalog, args: &BrowseArgs) -> anyhow::Result<()> {
    let books = query::run(catalog.books(), &args.criteria());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    println!("Showing {} of {} books", books.len(), catalog.books().len());
    for book in books {
        println!("{}", summary_line(book));
    }
    Ok(())
}

fn show(catalog: &Catalog, id: &str, json: bool) -> anyhow::Result<()> {
    let Some(book) = catalog.book(id) else {
        bail!("book '{id}' not found");
    };
    let discount = Discount::of(book);

    if json {
        let detail = serde_json::json!({ "book": book, "discount": discount });
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("{}", book.title);
    println!("by {}", book.author);
    println!();
    println!("Price:     {}", book.price);
    if let (Some(original), Some(discount)) = (book.original_price, discount) {
        println!(
            "           was {}, save {} ({}% off)",
            original, discount.savings, discount.percent
        );
    }
    println!("Rating:    {:.1} ({} reviews)", book.rating, book.review_count);
    println!("Category:  {}", book.category);
    println!("Publisher: {} ({})", book.publisher, book.published_date);
    println!("ISBN:      {}", book.isbn);
    println!("Pages:     {}", book.pages);
    println!(
        "Stock:     {}",
        if book.in_stock { "in stock" } else { "out of stock" }
    );
    println!();
    println!("{}", book.description);
    Ok(())
}

fn summary_line(book: &Book) -> String {
    format!(
        "{:>4}  {:>8}  {:.1}  {} by {} [{}]",
        book.id,
        book.price.to_string(),
        book.rating,
        book.title,
        book.author,
        book.category
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn browse_args_build_criteria() {
        let cli = Cli::parse_from([
            "bookhaven",
            "browse",
            "--category",
            "Romance",
            "-c",
            "Fiction",
            "--max-price",
            "25",
            "--sort",
            "title",
        ]);
        let Command::Browse(args) = cli.command else {
            panic!("expected browse");
        };

        let criteria = args.criteria();
        assert_eq!(criteria.categories.len(), 2);
        assert_eq!(criteria.sort, SortKey::Title);
        assert_eq!(
            criteria.price,
            PriceRange::from_dollars(None, Some(25.0))
        );
    }

    #[test]
    fn summary_line_shows_price_and_author() {
        let book = Catalog::seeded().book("3").unwrap();
        let line = summary_line(book);
        assert!(line.contains("$19.99"));
        assert!(line.contains("Hearts in Harmony by Emma Davis [Romance]"));
    }
}
