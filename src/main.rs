use clap::Parser;
use preventivi::cli::{Cli, Command, CompareArgs, GenerateArgs, ImportArgs, ListArgs};
use preventivi::config::Config;
use preventivi::extract::LopdfTextSource;
use preventivi::quote::{self, GenerateRequest, ImportOverrides};
use preventivi::render::Renderer;
use preventivi::report;
use preventivi::store::diff;
use preventivi::store::Store;
use preventivi::{logging, Error};

fn fail(e: Error) -> ! {
    eprintln!("error: {e}");
    std::process::exit(1);
}

fn generate(args: GenerateArgs, config: &Config, store: &Store) {
    let renderer = Renderer::new(&config.branding_dir, config.template_path.clone());
    let request = GenerateRequest {
        cliente: args.cliente,
        dest: args.dest.clone(),
        totale: args.totale,
        brand: args.brand.unwrap_or_else(|| config.default_brand.clone()),
    };

    match quote::generate(store, &renderer, request, quote::today()) {
        Ok(result) => {
            println!(
                "Preventivo per '{}' salvato in '{}'",
                result.record.cliente,
                args.dest.display()
            );
            if let Some(note) = report::outcome_note(&result.outcome) {
                println!("{note}");
            }
        }
        Err(e) => fail(e),
    }
}

fn import(args: ImportArgs, store: &Store) {
    let overrides = ImportOverrides {
        cliente: args.cliente,
        data: args.data,
    };

    match quote::import(store, &LopdfTextSource, &args.file, overrides, quote::today()) {
        Ok(record) => {
            println!(
                "Importato '{}' per il cliente '{}' (totale € {}).",
                args.file.display(),
                record.cliente,
                record.totale.as_deref().unwrap_or("-")
            );
        }
        Err(e) => fail(e),
    }
}

fn list(args: ListArgs, store: &Store) {
    let records = match store.list(args.cliente.as_deref()) {
        Ok(records) => records,
        Err(e) => fail(e),
    };

    if let Err(e) = report::print_list(&records, args.json) {
        fail(e);
    }
}

fn compare(args: CompareArgs, store: &Store) {
    let lookup = |position: i64| match store.get_by_position(position) {
        Ok(Some(record)) => record,
        Ok(None) => {
            eprintln!("ID {position} non valido. Usa 'preventivi list' per vedere gli ID.");
            std::process::exit(1);
        }
        Err(e) => fail(e),
    };

    let first = lookup(args.first);
    let second = lookup(args.second);

    let comparison = diff::compare_records(&first, &second, args.first, args.second);
    print!("{}", report::table::render_comparison(&comparison));
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => fail(e),
    };
    log::debug!("using archive {}", config.archive_path.display());
    let store = Store::new(&config.archive_path);

    match cli.command {
        Command::Generate(args) => generate(args, &config, &store),
        Command::Import(args) => import(args, &store),
        Command::List(args) => list(args, &store),
        Command::Compare(args) => compare(args, &store),
    }
}
