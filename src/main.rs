use bingo::engine::{patterns, DrawBlock, GameError, IssuePolicy, NotFoundError, ParticipantDetails};
use bingo::sheets::{read_xlsx, write_xlsx};
use bingo::types::{column_letter, CardId, ParticipantId};
use bingo::{
    load_draw_state, save_draw_state, Artifact, BingoError, EventConfig, ExportPipelineBuilder,
    GameSession, PatternKey, Roster,
};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Run a bingo event: issue cards, export them and play rounds")]
struct Cli {
    /// Event settings (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Draw state file (JSON): drawn balls and the card id sequence
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Issue cards to a participant, registering them first if needed
    Issue {
        /// Participants workbook; created when missing
        roster: PathBuf,
        /// Existing participant id
        #[arg(short, long, conflicts_with = "name")]
        participant: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = "")]
        surname: String,
        #[arg(long, default_value = "")]
        dni: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Never issue the same grid twice
        #[arg(long)]
        unique: bool,
    },
    /// Export one card as a PNG
    Image {
        roster: PathBuf,
        card: String,
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Export every card as PNGs in one zip
    Zip {
        roster: PathBuf,
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Export a participant's cards as a printable A4 PDF
    Pdf {
        roster: PathBuf,
        participant: String,
        /// Only this card, centered on its own page
        #[arg(long)]
        card: Option<String>,
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Draw balls until a card completes the pattern
    Play {
        roster: PathBuf,
        #[arg(short, long, default_value = "FULL_CARD")]
        pattern: PatternKey,
        #[arg(long, default_value = "Premio")]
        prize: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the winning patterns
    Patterns,
}

fn load_roster(path: &Path, config: &EventConfig) -> Result<Roster, BingoError> {
    let participants = if path.exists() {
        read_xlsx(&fs::read(path)?)?
    } else {
        log::info!("{} does not exist yet, starting an empty roster", path.display());
        Vec::new()
    };
    Ok(Roster::new()
        .with_limit(config.cards_per_participant)
        .with_participants(participants))
}

fn save(artifact: &Artifact, dir: &Path) -> Result<(), BingoError> {
    fs::create_dir_all(dir)?;
    let path = artifact.save_to(dir)?;
    println!("{}", path.display());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), BingoError> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => EventConfig::from_file(path)?,
        None => EventConfig::default(),
    };
    let fonts = config.font_data()?;
    let pipeline = || {
        fonts
            .iter()
            .fold(ExportPipelineBuilder::new(), |builder, data| {
                builder.with_font_data(data.clone())
            })
            .with_title(config.title.clone())
            .with_subtitle(config.subtitle.clone())
            .with_config(config.export.clone())
            .build()
    };
    let mut state = match &cli.state {
        Some(path) => load_draw_state(path)?,
        None => Default::default(),
    };

    match cli.command {
        Command::Issue {
            roster: path,
            participant,
            name,
            surname,
            dni,
            phone,
            count,
            unique,
        } => {
            let mut roster = load_roster(&path, &config)?.resume_from(&state);
            if unique {
                roster = roster.with_policy(IssuePolicy::Unique);
            }
            let id = match (participant, name) {
                (Some(id), _) => id,
                (None, Some(name)) => roster
                    .add_participant(ParticipantDetails {
                        name,
                        surname,
                        dni,
                        phone,
                    })
                    .to_string(),
                (None, None) => {
                    return Err(BingoError::Other("pass --participant or --name".into()));
                }
            };
            let issued = roster.issue_cards(&id, count)?;
            let ids: Vec<&str> = issued.iter().map(CardId::as_str).collect();
            println!("{}: {}", id, ids.join(", "));
            fs::write(&path, write_xlsx(roster.participants())?)?;
            roster.record_sequence(&mut state);
        }
        Command::Image { roster, card, out } => {
            let roster = load_roster(&roster, &config)?;
            let (participant, card) = roster
                .find_card(&card)
                .ok_or_else(|| NotFoundError::Card(CardId::new(card.as_str())))?;
            save(&pipeline().card_image(participant, card).await?, &out)?;
        }
        Command::Zip { roster, out } => {
            let roster = load_roster(&roster, &config)?;
            save(&pipeline().cards_archive(roster.participants()).await?, &out)?;
        }
        Command::Pdf {
            roster,
            participant,
            card,
            out,
        } => {
            let roster = load_roster(&roster, &config)?;
            let participant = roster
                .find_participant(&participant)
                .ok_or_else(|| {
                    NotFoundError::Participant(ParticipantId::new(participant.as_str()))
                })?;
            save(&pipeline().cards_pdf(participant, card.as_deref()).await?, &out)?;
        }
        Command::Play {
            roster,
            pattern,
            prize,
            seed,
        } => {
            let roster = load_roster(&roster, &config)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let mut game = GameSession::new().with_draw_state(state.clone());
            game.add_prize(prize);
            game.set_pattern(pattern)?;

            loop {
                let outcome = match game.draw_next(&mut rng, roster.participants()) {
                    Ok(outcome) => outcome,
                    Err(GameError::Blocked(DrawBlock::Exhausted)) => break,
                    Err(e) => return Err(e.into()),
                };
                let letter = column_letter(outcome.ball).unwrap_or('?');
                println!("{}-{}", letter, outcome.ball);
                for winner in &outcome.winners {
                    println!("¡BINGO! Cartón {} - {}", winner.card_id, winner.participant_name);
                }
                if !outcome.winners.is_empty() {
                    break;
                }
            }
            println!(
                "{} balls drawn, {} winner(s)",
                game.draw_state().len(),
                game.winners().len()
            );
            state = game.draw_state().clone();
        }
        Command::Patterns => {
            for p in patterns::all() {
                println!("{:<14} {}", p.key.as_str(), p.label);
            }
        }
    }

    if let Some(path) = &cli.state {
        save_draw_state(path, &state)?;
    }
    Ok(())
}
