use book_catalog_store::CatalogService;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) fn run_stats(service: &CatalogService) {
    let stats = service.stats();

    log::info!(
        "{}",
        "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    log::info!("  Total books:     {:>6}", stats.books);
    log::info!("  Owners:          {:>6}", stats.owners);
    log::info!("  Genres:          {:>6}", stats.genres);
    log::info!("  Rated books:     {:>6}", stats.rated);
    log::info!("  Average rating:  {:>6.1}", stats.average_rating);
}
