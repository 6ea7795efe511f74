fn main() {
    if let Err(err) = skills_svg_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
