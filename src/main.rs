use KiRate::Examples::reaction_examples::reaction_examples;
use KiRate::Utils::logger::init_logger;
use log::LevelFilter;

pub fn main() {
    if let Err(e) = init_logger(LevelFilter::Info) {
        eprintln!("logger was not installed: {}", e);
    }
    let task: usize = 2;
    reaction_examples(task);
}
