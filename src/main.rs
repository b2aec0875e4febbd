use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use degrees::{
    load_graph, GraphStore, NameResolver, Path, PersonId, Resolution, SearchEngine, SearchError,
};

#[derive(Parser, Debug)]
#[command(name = "degrees", version, about = "Degrees of separation between two actors")]
struct Cli {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(default_value = "large")]
    directory: PathBuf,

    /// First person's name (prompted for when omitted)
    #[arg(long)]
    source: Option<String>,

    /// Second person's name (prompted for when omitted)
    #[arg(long)]
    target: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let result = run(&cli, &mut stdin.lock(), &mut io::stdout().lock(), &mut io::stderr());
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write, E: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
    errors: &mut E,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    writeln!(output, "Loading data...")?;
    let graph = load_graph(&cli.directory)?;
    writeln!(output, "Data loaded.")?; // csv tables are in memory before any prompt

    let resolver = NameResolver::new(&graph);
    let Some(source) = ask_for_person(&resolver, cli.source.as_deref(), input, output)? else {
        writeln!(errors, "Person not found.")?;
        return Ok(ExitCode::FAILURE);
    };
    let Some(target) = ask_for_person(&resolver, cli.target.as_deref(), input, output)? else {
        writeln!(errors, "Person not found.")?;
        return Ok(ExitCode::FAILURE);
    };

    match SearchEngine::new(&graph).shortest_path(&source, &target) {
        Ok(path) => write_path(&graph, &source, &path, output)?,
        Err(SearchError::NotConnected { .. }) => writeln!(output, "Not connected.")?,
        Err(e) => return Err(e.into()),
    }
    Ok(ExitCode::SUCCESS)
}

// one line without its ending, None at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

fn ask_for_person<R: BufRead, W: Write>(
    resolver: &NameResolver<'_>,
    given: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<PersonId>> {
    let name = match given {
        Some(name) => name.to_string(),
        None => {
            write!(output, "Name: ")?;
            output.flush()?;
            match read_line(input)? {
                Some(name) => name,
                None => return Ok(None),
            }
        }
    };

    let resolution = match resolver.person_id_for_name(&name) {
        Ok(resolution) => resolution,
        Err(_) => return Ok(None),
    };

    match &resolution {
        Resolution::Unique(id) => Ok(Some(id.clone())),
        Resolution::Ambiguous(candidates) => {
            writeln!(output, "Which '{}'?", name)?;
            for candidate in candidates {
                writeln!(
                    output,
                    "ID: {}, Name: {}, Birth: {}",
                    candidate.id,
                    candidate.name,
                    candidate.birth.as_deref().unwrap_or("")
                )?;
            }
            write!(output, "Intended Person ID: ")?;
            output.flush()?;
            Ok(read_line(input)?.and_then(|chosen| resolution.select(&chosen)))
        }
    }
}

fn write_path<W: Write>(graph: &GraphStore, source: &PersonId, path: &Path, output: &mut W) -> io::Result<()> {
    writeln!(output, "{} degrees of separation.", path.degrees())?;

    let name_of = |id: &PersonId| {
        graph
            .person(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    let mut previous = source;
    for (i, step) in path.into_iter().enumerate() {
        let title = graph
            .movie(&step.movie)
            .map(|m| m.title.clone())
            .unwrap_or_else(|| step.movie.to_string());
        writeln!(
            output,
            "{}: {} and {} starred in {}",
            i + 1,
            name_of(previous),
            name_of(&step.person),
            title
        )?;
        previous = &step.person;
    }
    Ok(())
}
