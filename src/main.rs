use scintilla::Visualization;

fn main() {
    env_logger::init();

    Visualization::new()
        .with_size(250, 400)
        .with_title("scintilla")
        .run();
}
