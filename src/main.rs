use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use minus::Pager;
use sidediff::areas::comparison::Comparison;
use sidediff::artifacts::render::config::{
    ColorMode, DEFAULT_TAB_WIDTH, DEFAULT_WIDTH, RenderConfig,
};
use sidediff::artifacts::render::pager::{PagerWriter, page_all};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sidediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Side-by-side structural diff of two files",
    long_about = "This command diffs two versions of a file line by line and token by token, \
    then lays the result out as aligned rows: the old version on the left, the new one on the right. \
    Changed tokens are highlighted in place.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The old version of the file")]
    old: PathBuf,
    #[arg(index = 2, help = "The new version of the file")]
    new: PathBuf,
    #[arg(short, long, default_value_t = DEFAULT_WIDTH, help = "The width of each column")]
    width: usize,
    #[arg(
        long,
        default_value_t = DEFAULT_TAB_WIDTH,
        help = "The number of columns between tab stops"
    )]
    tab_width: usize,
    #[arg(short = 'n', long, help = "Show line numbers")]
    line_numbers: bool,
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, help = "When to color the output")]
    color: ColorMode,
    #[arg(long, help = "Write to stdout even when it is a terminal")]
    no_pager: bool,
    #[arg(long, help = "Dump the ranges of every row instead of rendering them")]
    rows: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let is_terminal = std::io::stdout().is_terminal();

    cli.color.apply(is_terminal);
    let config = RenderConfig::new(
        cli.width,
        cli.tab_width,
        cli.line_numbers,
        cli.color,
        is_terminal && !cli.no_pager,
    );

    if config.pager {
        let pager = Pager::new();
        let comparison = Comparison::open(
            &cli.old,
            &cli.new,
            Box::new(PagerWriter::new(pager.clone())),
        )?;

        run(&cli, &comparison, &config)?;
        page_all(pager)?;
    } else {
        let comparison = Comparison::open(&cli.old, &cli.new, Box::new(std::io::stdout()))?;

        run(&cli, &comparison, &config)?;
    }

    Ok(())
}

fn run(cli: &Cli, comparison: &Comparison, config: &RenderConfig) -> Result<()> {
    if cli.rows {
        comparison.dump_rows()
    } else {
        comparison.side_by_side(config)
    }
}
