use std::{path::PathBuf, rc::Rc};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use library_catalog::{
    AuthorSearch, Book, CatalogConfig, Command, EntityFactory, FileLogSink, Invoker, Librarian,
    LibrarianNameSearch, Library, Reader, ReaderNameSearch, Result, ReversibleCommand,
    SearchStrategy, SharedLibrary, TitleSearch,
    commands::{
        AddBookCommand, AddLibrarianCommand, AddReaderCommand, Light, LightOffCommand,
        LightOnCommand, RemoveBookCommand,
    },
    execute_logged,
};

/// Command-line arguments for the library catalog demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file the book collection is saved to
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Text file catalog events are appended to
    #[arg(long)]
    log: Option<PathBuf>,

    /// What to run
    #[command(subcommand)]
    action: Action,
}

/// Demo actions
#[derive(Subcommand, Debug)]
enum Action {
    /// Build the sample catalog, search it, save it and read it back
    Demo,
    /// Search the sample people or the saved books
    Search {
        /// Field to match against
        #[arg(long, value_enum, default_value_t = SearchField::Title)]
        by: SearchField,
        /// Case-insensitive substring to look for
        query: String,
    },
    /// Switch a light on and off, then undo the last switch
    Light,
}

/// Selectable search strategies
#[derive(ValueEnum, Clone, Copy, Debug)]
enum SearchField {
    /// Book title
    Title,
    /// Book author
    Author,
    /// Reader name
    Reader,
    /// Librarian name
    Librarian,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = CatalogConfig::from_env().with_overrides(args.catalog, args.log);

    println!("{}", "Library Catalog".green().bold());
    println!("===============\n");

    match args.action {
        Action::Demo => run_demo(&config)?,
        Action::Search { by, query } => run_search(&config, by, &query)?,
        Action::Light => run_light()?,
    }

    println!("\n{}", "Done!".green().bold());
    Ok(())
}

/// Sample readers
fn sample_readers() -> Vec<Reader> {
    vec![
        EntityFactory::create_reader("Vasily Zaitsev", 25),
        EntityFactory::create_reader("Elena Malysheva", 35),
    ]
}

/// Sample librarians
fn sample_librarians() -> Vec<Librarian> {
    vec![EntityFactory::create_librarian("Viktor Stepanov")]
}

/// Replays the full catalog workflow against a fresh catalog
fn run_demo(config: &CatalogConfig) -> Result<()> {
    println!("{}", "Filling the catalog...".yellow().bold());

    let library = Library::shared();
    let mut sink = FileLogSink::new(&config.log_path);

    let nineteen_eighty_four = EntityFactory::create_book("1984", "George Orwell");
    let brave_new_world = EntityFactory::create_book("Brave New World", "Aldous Huxley");
    let cthulhu = EntityFactory::create_book("The Call of Cthulhu", "H. P. Lovecraft");
    let fahrenheit = EntityFactory::create_book("Fahrenheit 451", "Ray Bradbury");

    let mut commands: Vec<Box<dyn Command>> = vec![
        Box::new(AddBookCommand::new(&library, nineteen_eighty_four)),
        Box::new(AddBookCommand::new(&library, brave_new_world.clone())),
        Box::new(AddBookCommand::new(&library, cthulhu)),
        Box::new(RemoveBookCommand::new(&library, brave_new_world)),
        Box::new(AddBookCommand::new(&library, fahrenheit)),
    ];
    for reader in sample_readers() {
        commands.push(Box::new(AddReaderCommand::new(&library, reader)));
    }
    for librarian in sample_librarians() {
        commands.push(Box::new(AddLibrarianCommand::new(&library, librarian)));
    }

    for command in &commands {
        execute_logged(command.as_ref(), &mut sink)?;
        println!("  {}", command.describe());
    }
    println!("Catalog now holds {}", library.with(ToString::to_string)?);

    println!("\n{}", "Searching...".yellow().bold());
    print_matches("Title search for \"1984\"", &TitleSearch.search(&library.books()?, "1984"));
    print_matches(
        "Author search for \"H. P. Lovecraft\"",
        &AuthorSearch.search(&library.books()?, "H. P. Lovecraft"),
    );
    print_matches(
        "Reader search for \"Elena Malysheva\"",
        &ReaderNameSearch.search(&library.readers()?, "Elena Malysheva"),
    );
    print_matches(
        "Librarian search for \"Viktor Stepanov\"",
        &LibrarianNameSearch.search(&library.librarians()?, "Viktor Stepanov"),
    );

    println!("\n{}", "Saving and reloading...".yellow().bold());
    library.with(|catalog| catalog.save_books(&config.catalog_path))??;
    println!("Saved books to {}", config.catalog_path.display());

    let reloaded = Library::new().load_books(&config.catalog_path)?.unwrap_or_default();
    print_matches("Books read back", &reloaded);

    Ok(())
}

/// Searches the saved books, or the sample people
fn run_search(config: &CatalogConfig, by: SearchField, query: &str) -> Result<()> {
    println!("{}", format!("Searching {by:?} for \"{query}\"...").yellow().bold());

    match by {
        SearchField::Title | SearchField::Author => {
            let Some(books) = saved_books(config)? else {
                println!(
                    "No saved catalog at {}; run the demo first",
                    config.catalog_path.display()
                );
                return Ok(());
            };
            let matches = if matches!(by, SearchField::Author) {
                AuthorSearch.search(&books, query)
            } else {
                TitleSearch.search(&books, query)
            };
            print_matches("Matching books", &matches);
        }
        SearchField::Reader => {
            print_matches("Matching readers", &ReaderNameSearch.search(&sample_readers(), query));
        }
        SearchField::Librarian => {
            print_matches(
                "Matching librarians",
                &LibrarianNameSearch.search(&sample_librarians(), query),
            );
        }
    }

    Ok(())
}

/// Loads the saved books into a catalog and returns them
fn saved_books(config: &CatalogConfig) -> Result<Option<Vec<Book>>> {
    let library = SharedLibrary::default();
    let Some(loaded) = library.with(|catalog| catalog.load_books(&config.catalog_path))?? else {
        return Ok(None);
    };
    library.with_mut(|catalog| catalog.restore_books(loaded))?;
    library.books().map(Some)
}

/// Demonstrates undo through the invoker's history
fn run_light() -> Result<()> {
    println!("{}", "Operating the light switch...".yellow().bold());

    let light = Rc::new(Light::new("reading room"));
    let light_on: Rc<dyn ReversibleCommand> = Rc::new(LightOnCommand::new(&light));
    let light_off: Rc<dyn ReversibleCommand> = Rc::new(LightOffCommand::new(&light));
    let mut invoker = Invoker::new();

    invoker.set_command(light_on);
    invoker.press_button()?;
    print_light(&light, "switch on");

    invoker.set_command(light_off);
    invoker.press_button()?;
    print_light(&light, "switch off");

    invoker.press_undo()?;
    print_light(&light, "undo");

    Ok(())
}

/// Print the light state after an action
fn print_light(light: &Light, action: &str) {
    let state = if light.is_on() { "on".green() } else { "off".red() };
    println!("After {action}: light in {} is {state}", light.location());
}

/// Print search or load results
fn print_matches<T: std::fmt::Display>(label: &str, items: &[T]) {
    println!("{}:", label.blue());
    if items.is_empty() {
        println!("  (nothing)");
    }
    for item in items {
        println!("  {item}");
    }
}
