use id3::cli::{ClassifyArgs, Command, LearnArgs, RenderArgs};
use id3::error::Result;

fn main() {
    id3::logging::init();

    if let Err(err) = run(std::env::args()) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run(args: impl IntoIterator<Item = String>) -> Result<()> {
    let cli = id3::cli::parse(args)?;
    match cli.command {
        Command::Learn(args) => run_learn(args),
        Command::Render(args) => run_render(args),
        Command::Classify(args) => run_classify(args),
    }
}

fn run_learn(args: LearnArgs) -> Result<()> {
    log::info!("learning: attr={:?} learn={:?} out={:?}", args.attr, args.learn, args.out);
    let impute_policy = args.impute_policy()?;

    let attr_text = std::fs::read_to_string(&args.attr)?;
    let mut description = id3::io::read_description(&attr_text)?;

    let learn_text = std::fs::read_to_string(&args.learn)?;
    let mut set = id3::io::read_learning_set(&learn_text, &description)?;
    log::info!("read {} examples over {} attributes", set.n(), description.m());

    id3::impute::treat_missing(&mut set, &description, impute_policy);
    id3::index::index_all(&mut description, &set);
    id3::discretize::discretize_all(&mut description, &set, args.discretize_policy());

    let classifier = id3::induce::learn(&description, &mut set);
    log::debug!("induced tree rooted at tag {}", classifier.tag());

    std::fs::write(&args.out, id3::io::write_model(&description, &classifier))?;
    log::info!("wrote model to {:?}", args.out);
    Ok(())
}

fn run_render(args: RenderArgs) -> Result<()> {
    let model_text = std::fs::read_to_string(&args.model)?;
    let (description, classifier) = id3::io::read_model(&model_text)?;
    let format = args.format();
    log::info!("rendering {:?} as {:?}", args.model, format);

    let text = id3::render::render(&description, &classifier, format);
    write_output(&args.out, &text)
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    let model_text = std::fs::read_to_string(&args.model)?;
    let (description, classifier) = id3::io::read_model(&model_text)?;

    let test_text = std::fs::read_to_string(&args.test)?;
    let set = id3::io::read_testing_set(&test_text, &description)?;
    log::info!("classifying {} rows from {:?}", set.n(), args.test);

    let mut text = id3::classify::classify_set(&description, &classifier, &set).join("\n");
    text.push('\n');
    write_output(&args.out, &text)
}

fn write_output(out: &Option<std::path::PathBuf>, text: &str) -> Result<()> {
    match out {
        Some(path) if path.as_os_str() != "-" => std::fs::write(path, text)?,
        _ => print!("{text}"),
    }
    Ok(())
}
