/// Catalogue service module
///
/// This module handles:
/// - Fetching one page of artworks from the Art Institute of Chicago API
/// - Decoding the JSON response into typed records plus the total count

pub mod client;
