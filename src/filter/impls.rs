pub mod tag_filter;
