use sample_engine::device::OutputBinding as _;
use sample_engine::device::cpal_out::CpalOutputBinding;
use sample_engine::load_audio;

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: sample_engine <file> [--music]");
        std::process::exit(1);
    };
    let is_music = args.any(|arg| arg == "--music");

    let source = match load_audio(&path, is_music) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            std::process::exit(1);
        }
    };

    let mut binding = CpalOutputBinding::new();
    match binding.start(source) {
        Ok(()) => {
            println!("Audio stream started.");
            std::thread::park(); // Keep main alive to keep stream alive
        }
        Err(e) => eprintln!("Failed to start audio stream: {e}"),
    }
}
