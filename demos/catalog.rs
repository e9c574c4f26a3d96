use movie_catalog::{resolve, InMemoryMovieStore, MovieStore, Screen, ScreenContent};
use tracing_subscriber::EnvFilter;

fn print_screen(store: &InMemoryMovieStore, screen: &Screen) {
    match resolve(store, screen) {
        ScreenContent::Movies(movies) => {
            println!("[{}] {}", screen, screen.title().unwrap_or_default());
            for movie in movies {
                let marker = if movie.is_favorite() { "*" } else { " " };
                println!("  {} {} ({})", marker, movie.title(), movie.year());
            }
        }
        ScreenContent::Detail(movie) => {
            println!("[{}] {}", screen, movie.title());
            println!("  Director: {}", movie.director());
            println!("  Released: {}", movie.year());
            println!("  Genre: {}", movie.genre());
            println!("  Actors: {}", movie.actors());
            println!("  Rating: {}", movie.rating());
            println!("  Plot: {}", movie.plot());
            println!("  Trailer: {}", movie.trailer());
        }
        ScreenContent::NotFound { movie_id } => {
            println!("[{}] no movie with id {}", screen, movie_id);
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // One store for the whole session, shared by every screen
    let store = InMemoryMovieStore::new();

    store.subscribe(|event| {
        println!(
            "favorite changed: {} -> {} (revision {})",
            event.id, event.is_favorite, event.revision
        );
    });

    print_screen(&store, &Screen::Home);

    let ids: Vec<String> = store
        .list()
        .iter()
        .take(2)
        .map(|movie| movie.id().to_string())
        .collect();
    for id in &ids {
        store.toggle_favorite(id);
    }
    print_screen(&store, &Screen::Watchlist);

    if let Some(screen) = ids.first().and_then(|id| Screen::parse(&Screen::detail(id).route())) {
        print_screen(&store, &screen);
    }

    // Unknown ids are ignored
    store.toggle_favorite("tt0000000");
    print_screen(&store, &Screen::detail("tt0000000"));
}
