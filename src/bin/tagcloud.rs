use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tagcloud::prelude::*;

/// Generate a word-frequency tag cloud from a text file.
///
/// Any of the input file, word limit or output file left off the command line
/// is asked for on the console.
#[derive(Parser, Debug)]
#[command(name = "tagcloud", version)]
struct Args {
  /// Text file to read
  #[arg(short, long)]
  input: Option<PathBuf>,

  /// File to write the cloud to
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Maximum number of words in the cloud
  #[arg(short = 'n', long, value_parser = parse_limit)]
  limit: Option<usize>,

  /// JSON configuration file
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Output format (overrides the config file)
  #[arg(short, long, value_enum)]
  format: Option<OutputFormat>,

  /// Log more (-v for debug, -vv for trace)
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,
}

/// Parses a word limit: a positive integer.
fn parse_limit(text: &str) -> Result<usize, CloudError> {
  match text.trim().parse::<usize>() {
    Ok(limit) if limit > 0 => Ok(limit),
    _ => Err(CloudError::InvalidLimit(text.trim().to_string())),
  }
}

/// Console questions for whatever the command line left out.
struct Prompt<R, W> {
  input: R,
  output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
  fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  /// Prints `question` and reads one trimmed line.
  fn ask(&mut self, question: &str) -> Result<String, CloudError> {
    writeln!(self.output, "{question}").map_err(CloudError::Prompt)?;
    self.output.flush().map_err(CloudError::Prompt)?;

    let mut line = String::new();
    let read = self.input.read_line(&mut line).map_err(CloudError::Prompt)?;
    if read == 0 {
      return Err(CloudError::Prompt(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "console closed",
      )));
    }
    Ok(line.trim().to_string())
  }

  /// Asks for a limit until a positive integer is given.
  fn ask_limit(&mut self) -> Result<usize, CloudError> {
    let mut answer = self.ask("Max Word Count: ")?;
    loop {
      match parse_limit(&answer) {
        Ok(limit) => return Ok(limit),
        Err(err) => {
          log::debug!("{err}");
          answer = self.ask("Max Word Count Must Be A Positive Integer, Enter Another: ")?;
        }
      }
    }
  }
}

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => "warn",
    1 => "debug",
    _ => "trace",
  };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: Args) -> Result<(), CloudError> {
  let mut config = match &args.config {
    Some(path) => CloudConfig::from_file(path)?,
    None => CloudConfig::default(),
  };
  if let Some(limit) = args.limit {
    config.limit = Some(limit);
  }
  if let Some(format) = args.format {
    config.format = format;
  }
  let scale = config.fonts.scale()?;

  let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
  let input_path = match args.input {
    Some(path) => path,
    None => PathBuf::from(prompt.ask("Name of input file: ")?),
  };
  let limit = match config.limit {
    Some(limit) => limit,
    None => prompt.ask_limit()?,
  };
  let output_path = match args.output {
    Some(path) => path,
    None => PathBuf::from(prompt.ask("Name of output file: ")?),
  };

  // Open the input first so a missing file leaves no empty output behind.
  let source = File::open(&input_path).map_err(|source| CloudError::SourceOpen {
    path: input_path.clone(),
    source,
  })?;
  let sink = File::create(&output_path).map_err(|source| CloudError::SinkOpen {
    path: output_path.clone(),
    source,
  })?;

  let engine = TagCloud::builder().font_scale(scale).build();
  let cloud = engine.generate_from_reader(BufReader::new(source), limit);

  let mut out = BufWriter::new(sink);
  match config.format {
    OutputFormat::Html => {
      let page = HtmlPage::with_config(output_path.display().to_string(), &config);
      page.write_to(&cloud, &mut out)?;
    }
    OutputFormat::Json => {
      out.write_all(JsonRenderer.render(&cloud)?.as_bytes())?;
      out.flush()?;
    }
  }

  log::info!(
    "wrote {} of {} words to {}",
    cloud.len(),
    cloud.distinct_words,
    output_path.display()
  );
  Ok(())
}

fn main() -> ExitCode {
  let args = Args::parse();
  init_logging(args.verbose);

  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      log::error!("{err}");
      ExitCode::FAILURE
    }
  }
}
