mod catalog_queries;
mod dataset_integrity;
