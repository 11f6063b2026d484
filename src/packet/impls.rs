pub mod metric_event;
