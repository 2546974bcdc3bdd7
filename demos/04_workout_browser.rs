/// fetch the exercise sheet and filter by training day
use finkit_rs::ExerciseSheetClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let day = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());

    let client = ExerciseSheetClient::new();
    let exercises = client.exercises_for_day(&day).await?;

    for exercise in exercises {
        println!(
            "[{}] {} - {} sets of {}",
            exercise.day,
            exercise.exercise,
            exercise.sets.unwrap_or_default(),
            exercise.reps_range.unwrap_or_default()
        );
    }

    Ok(())
}
