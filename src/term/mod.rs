extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Cell, Error, Processor, Tick, SLOTS};
use crate::{info, log};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult, Terminal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

mod demo;
mod options;
mod render;

pub use demo::Demo;
pub use options::Options;

pub fn main() {
    let options = Options::parse();
    log::set_level(options.log_level);
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let result = if options.step {
        step_loop(&options, interrupted)
    } else {
        play_loop(&options, interrupted)
    };
    if let Err(error) = result {
        eprintln!("{}", error);
    }
}

/// Builds the agent: the world from the options, scattered items, and the demo tape.
pub fn agent(options: &Options) -> Result<Processor, Error> {
    let mut world = options.world();
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    for _ in 0..options.items {
        let cell = Cell::new(
            rng.gen_range(0..world.width()),
            rng.gen_range(0..world.height()),
        );
        world.place(cell, rng.gen_range(1..=SLOTS));
    }
    let mut processor = Processor::new(world);
    options.demo.load(&mut processor)?;
    processor.reset();
    info!("loaded {:?} demo", options.demo);
    Ok(processor)
}

fn play_loop(options: &Options, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut processor = match agent(options) {
        Ok(processor) => processor,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return Ok(());
        }
    };
    let frame_time = Duration::from_millis(1000 / options.fps);
    let stdout = std::io::stdout();
    let mut frame = 0;
    let mut effects = vec![];
    loop {
        {
            let mut out = stdout.lock();
            write!(out, "{}", render::CLEAR)?;
            write!(out, "{}", render::grid(processor.world(), &effects, true))?;
            writeln!(out, "{}", render::status(&processor, frame))?;
            out.flush()?;
        }
        if interrupted.load(Ordering::SeqCst) {
            info!("interrupted at frame {}", frame);
            break;
        }
        if processor.world().is_destroyed() {
            println!("{}", Style::new().bold().paint("BOOM."));
            break;
        }
        if !processor.running() {
            println!("{}", Style::new().bold().paint("HALTED."));
            break;
        }
        if let Err(error) = processor.tick() {
            println!("{}", Style::new().bold().paint(error.to_string()));
            break;
        }
        effects = processor.take_effects();
        frame += 1;
        std::thread::sleep(frame_time);
    }
    Ok(())
}

#[derive(Debug, PartialEq)]
enum Command {
    Tick(usize),
    Run,
    Reset,
    Dump,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Command> {
        let mut words = line.split_whitespace();
        let word = match words.next() {
            Some(word) => word.to_ascii_lowercase(),
            None => return Some(Command::Tick(1)),
        };
        let count = match words.next() {
            Some(n) => n.parse::<usize>().ok()?,
            None => 1,
        };
        if words.next().is_some() {
            return None;
        }
        match word.as_str() {
            "tick" | "t" => Some(Command::Tick(count)),
            "run" | "r" => Some(Command::Run),
            "reset" => Some(Command::Reset),
            "dump" | "list" => Some(Command::Dump),
            "help" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "tick [n]  run  reset  dump  quit";

fn step_loop(options: &Options, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("dwarf")?;
    interface.set_prompt("> ")?;
    let mut processor = match agent(options) {
        Ok(processor) => processor,
        Err(error) => {
            interface.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(error.to_string())
            ))?;
            return Ok(());
        }
    };
    let mut frame = 0;
    show(&interface, &processor, frame, &[])?;
    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if !line.trim().is_empty() {
            interface.add_history_unique(line.clone());
        }
        let count = match Command::parse(&line) {
            Some(Command::Tick(n)) => n,
            Some(Command::Run) => usize::max_value(),
            Some(Command::Reset) => {
                processor.reset();
                frame = 0;
                show(&interface, &processor, frame, &[])?;
                continue;
            }
            Some(Command::Dump) => {
                interface.write_fmt(format_args!("{}\n", processor.dump()))?;
                continue;
            }
            Some(Command::Help) => {
                interface.write_fmt(format_args!("{}\n", HELP))?;
                continue;
            }
            Some(Command::Quit) => break,
            None => {
                interface.write_fmt(format_args!("?{}\n", HELP))?;
                continue;
            }
        };
        let mut effects = vec![];
        interrupted.store(false, Ordering::SeqCst);
        for _ in 0..count {
            if interrupted.load(Ordering::SeqCst) {
                break;
            }
            match processor.tick() {
                Ok(Tick::Idle) => break,
                Ok(_) => frame += 1,
                Err(error) => {
                    interface.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                    break;
                }
            }
            effects.append(&mut processor.take_effects());
            if processor.world().is_destroyed() {
                break;
            }
        }
        show(&interface, &processor, frame, &effects)?;
    }
    Ok(())
}

fn show<T: Terminal>(
    interface: &Interface<T>,
    processor: &Processor,
    frame: u64,
    effects: &[crate::mach::Effect],
) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}{}\n",
        render::grid(processor.world(), effects, true),
        render::status(processor, frame)
    ))
}
