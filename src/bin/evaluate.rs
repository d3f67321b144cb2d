use std::env;
use std::error::Error;

use rusty_id3::data::reader::read_table;
use rusty_id3::metrics::confusion::ConfusionReport;
use rusty_id3::trees::classifier::DecisionTreeClassifier;

fn run(
    train_path: &str,
    test_path: &str,
    target_index: usize,
    positive_label: &str,
) -> Result<(), Box<dyn Error>> {
    let train_table = read_table(train_path, target_index)?;
    let test_table = read_table(test_path, target_index)?;
    println!(
        "Loaded {} training rows and {} test rows",
        train_table.num_rows(),
        test_table.num_rows()
    );

    let mut classifier = DecisionTreeClassifier::new();
    classifier.fit(&train_table)?;

    let predictions = classifier.predict_table(&test_table)?;
    for (prediction, actual) in predictions.iter().zip(test_table.target().values()) {
        println!("Prediction: {}\t Target Value: {}", prediction, actual);
    }

    let report = ConfusionReport::from_predictions(
        &predictions,
        test_table.target(),
        &positive_label.to_string(),
    )?;
    println!("{}", report);

    if let Some(root) = classifier.root() {
        println!("{}", root);
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!(
            "Usage: {} <train.csv> <test.csv> <target-column-index> <positive-label>",
            args[0]
        );
        std::process::exit(1);
    }

    let target_index = match args[3].parse::<usize>() {
        Ok(index) => index,
        Err(err) => panic!("Invalid target column index {:?}: {}", args[3], err),
    };

    if let Err(err) = run(&args[1], &args[2], target_index, &args[4]) {
        panic!("{}", err);
    }
}
