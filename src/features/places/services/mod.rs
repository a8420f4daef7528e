mod address_extractor;
mod detail_fetcher;
mod enrichment_pipeline;
mod paginated_searcher;

pub use address_extractor::extract_address;
pub use detail_fetcher::DetailFetcher;
pub use enrichment_pipeline::EnrichmentPipeline;
pub use paginated_searcher::PaginatedSearcher;
