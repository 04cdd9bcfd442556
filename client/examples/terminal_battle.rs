//! Terminal Battle Example
//!
//! Plays PokeClash in the terminal. Type `pick <n>` to choose a creature from
//! the offered list and `use <ability>` to attack. Sounds are printed rather
//! than played.

use anyhow::Result;
use pokeclash_battle::hp_percent;
use pokeclash_client::{
    ClientConfig, Creature, Game, GameHandle, HttpSource, PlaybackError, Presenter, Side,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Default)]
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn render_round(&mut self, round: u32) {
        println!("\n=== Round {round} ===");
    }

    fn render_combatant(&mut self, side: Side, creature: &Creature) {
        let who = match side {
            Side::Player => "You send out",
            Side::Enemy => "Enemy sends out",
        };
        println!("{who} {} ({})", creature.name(), creature.image_ref());
    }

    fn update_health_bar(&mut self, side: Side, current_hp: u32, max_hp: u32) {
        let filled = (hp_percent(current_hp, max_hp) / 5) as usize;
        println!(
            "  {side:<6} [{}{}] {current_hp}/{max_hp}",
            "#".repeat(filled),
            " ".repeat(20 - filled)
        );
    }

    fn render_choices(&mut self, candidates: &[Creature]) {
        println!("Choose your Pokémon:");
        for (i, creature) in candidates.iter().enumerate() {
            println!(
                "  {i}: {} (attack {}, hp {})",
                creature.name(),
                creature.base_attack(),
                creature.max_hp()
            );
        }
    }

    fn render_abilities(&mut self, abilities: &[String]) {
        println!("Abilities: {}", abilities.join(", "));
    }

    fn append_log_entry(&mut self, text: &str) {
        println!("> {text}");
    }

    fn show_flash_message(&mut self, text: &str) {
        println!("\n*** {text} ***\n");
    }

    fn play_sound(&mut self, path: &str) -> Result<(), PlaybackError> {
        println!("  ♪ {path}");
        Ok(())
    }

    fn play_creature_cry(&mut self, _name: &str, path: &str) -> Result<(), PlaybackError> {
        if std::path::Path::new(path).exists() {
            println!("  ♪ {path}");
            Ok(())
        } else {
            Err(PlaybackError::new(path, "file not found"))
        }
    }

    fn show_alert(&mut self, text: &str) {
        eprintln!("!! {text}");
    }
}

/// Returns false once the player asked to quit
fn handle_input(line: &str, handle: &GameHandle) -> bool {
    let line = line.trim();
    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
    let arg = arg.trim();

    let sent = match command {
        "pick" => match arg.parse::<usize>() {
            Ok(index) => handle.select_creature(index),
            Err(_) => {
                println!("Usage: pick <number>");
                return true;
            }
        },
        "use" if !arg.is_empty() => handle.use_ability(arg),
        "use" => {
            println!("Usage: use <ability>");
            return true;
        }
        "quit" | "exit" => return false,
        "" => return true,
        other => {
            println!("Unknown command: {other}. Try pick <n>, use <ability> or quit.");
            return true;
        }
    };

    sent.is_ok()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("PokeClash");
    println!("=========");

    let config = ClientConfig::from_env();
    let source = HttpSource::new(config.api_url.clone());
    println!(
        "Loading {} Pokémon from {}...",
        config.roster_limit, config.api_url
    );

    let (mut game, handle) = Game::new(source, TerminalPresenter, config);

    tokio::spawn(async move {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        while let Ok(Some(line)) = lines.next_line().await {
            if !handle_input(&line, &handle) {
                break;
            }
        }
        // Dropping the handle stops the game
    });

    game.run().await
}
