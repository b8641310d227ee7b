mod test_config;
mod test_dataset;
mod test_evaluation;
mod test_label;
