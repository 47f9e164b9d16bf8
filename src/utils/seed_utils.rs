use chrono::{Duration, Utc};

use crate::models::mood::{MoodEntry, WellnessPractice};
use crate::models::nutrition::{FoodItem, Meal, WaterIntake};
use crate::models::sleep::{SleepJournalEntry, SleepNight};
use crate::models::workout::{Exercise, HeartRateSummary, Workout, WorkoutExercise};
use crate::services::store::MemoryStore;

/*
Demo dataset the server starts with when seeding is enabled. Everything is
dated relative to startup so the dashboard, streaks and weekly windows stay
meaningful no matter when the server is launched.
*/
pub async fn seed_demo_data(store: &MemoryStore) {
    store.insert_workouts(demo_workouts()).await;
    store.insert_meals(demo_meals()).await;
    store
        .set_water_intake(WaterIntake {
            value: 1.8,
            goal: 2.5,
            unit: "L".to_string(),
        })
        .await;
    store.insert_sleep_nights(demo_sleep_nights()).await;
    store.insert_sleep_journal(demo_sleep_journal()).await;
    store.insert_mood_entries(demo_mood_entries()).await;
    store.insert_practices(demo_practices()).await;
    println!("Demo data seeded.");
}

pub fn demo_workouts() -> Vec<Workout> {
    let now = Utc::now();

    vec![
        Workout {
            id: "1".to_string(),
            workout_type: "Running".to_string(),
            date: now - Duration::days(1),
            duration: 30,
            calories: Some(320),
            distance: Some(4.2),
            steps: None,
            heart_rate: Some(HeartRateSummary { avg: 145, max: 178 }),
            exercises: None,
            notes: Some("Morning run in the park. Felt great after the first mile.".to_string()),
            completed: true,
        },
        Workout {
            id: "2".to_string(),
            workout_type: "Strength Training".to_string(),
            date: now - Duration::days(3),
            duration: 45,
            calories: Some(280),
            distance: None,
            steps: None,
            heart_rate: None,
            exercises: Some(vec![
                strength_exercise("Bench Press", 4, 10, Some(70.0)),
                strength_exercise("Squats", 3, 12, Some(90.0)),
                strength_exercise("Pull Ups", 3, 8, None),
                strength_exercise("Shoulder Press", 3, 10, Some(20.0)),
            ]),
            notes: Some("Upper/lower body split. Increased weight on bench press.".to_string()),
            completed: true,
        },
        Workout {
            id: "3".to_string(),
            workout_type: "Yoga".to_string(),
            date: now - Duration::days(5),
            duration: 60,
            calories: Some(150),
            distance: None,
            steps: None,
            heart_rate: None,
            exercises: None,
            notes: Some("Evening yoga session. Focused on flexibility and stress reduction.".to_string()),
            completed: true,
        },
        Workout {
            id: "4".to_string(),
            workout_type: "Running".to_string(),
            date: now + Duration::days(1),
            duration: 40,
            calories: None,
            distance: Some(5.0),
            steps: None,
            heart_rate: None,
            exercises: None,
            notes: Some("Scheduled morning run. Goal: maintain steady pace.".to_string()),
            completed: false,
        },
        Workout {
            id: "5".to_string(),
            workout_type: "HIIT".to_string(),
            date: now + Duration::days(2),
            duration: 25,
            calories: Some(300),
            distance: None,
            steps: None,
            heart_rate: None,
            exercises: None,
            notes: Some("Planned HIIT session. Circuit training with 30s work/15s rest.".to_string()),
            completed: false,
        },
    ]
}

fn strength_exercise(name: &str, sets: u32, reps: u32, weight: Option<f64>) -> WorkoutExercise {
    WorkoutExercise {
        name: name.to_string(),
        sets,
        reps,
        weight,
        duration: None,
    }
}

pub fn demo_meals() -> Vec<Meal> {
    let today = Utc::now().date_naive();

    vec![
        Meal {
            id: "1".to_string(),
            name: "Breakfast".to_string(),
            date: today,
            time: "7:30 AM".to_string(),
            calories: 420,
            items: vec![
                food("Avocado Toast", 240, 8, 22, 15),
                food("Greek Yogurt", 120, 15, 8, 2),
                food("Coffee with Milk", 60, 2, 5, 3),
            ],
            planned: None,
        },
        Meal {
            id: "2".to_string(),
            name: "Lunch".to_string(),
            date: today,
            time: "12:15 PM".to_string(),
            calories: 580,
            items: vec![
                food("Chicken Salad", 350, 32, 18, 18),
                food("Whole Grain Bread", 150, 5, 30, 2),
                food("Apple", 80, 0, 21, 0),
            ],
            planned: None,
        },
        Meal {
            id: "3".to_string(),
            name: "Snack".to_string(),
            date: today,
            time: "3:45 PM".to_string(),
            calories: 180,
            items: vec![food("Mixed Nuts", 180, 6, 6, 16)],
            planned: None,
        },
        Meal {
            id: "4".to_string(),
            name: "Dinner".to_string(),
            date: today,
            time: "7:00 PM".to_string(),
            calories: 0,
            items: vec![],
            planned: Some(true),
        },
    ]
}

fn food(name: &str, calories: u32, protein: u32, carbs: u32, fat: u32) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        calories,
        protein,
        carbs,
        fat,
        serving_size: None,
        serving_unit: None,
    }
}

pub fn demo_sleep_nights() -> Vec<SleepNight> {
    let today = Utc::now().date_naive();
    let night = |days_ago: i64, duration: f64, quality: u32, deep: f64, light: f64, rem: f64, awake: f64, bedtime: &str, wakeup: &str, efficiency: u32| SleepNight {
        date: today - Duration::days(days_ago),
        duration,
        quality,
        deep_sleep: deep,
        light_sleep: light,
        rem_sleep: rem,
        awake,
        bedtime: bedtime.to_string(),
        wakeup: wakeup.to_string(),
        sleep_efficiency: efficiency,
    };

    vec![
        night(6, 6.5, 72, 1.4, 3.6, 1.5, 0.6, "23:45", "06:45", 78),
        night(5, 7.8, 85, 2.0, 4.1, 1.7, 0.3, "22:50", "06:50", 88),
        night(4, 6.9, 74, 1.5, 3.8, 1.6, 0.5, "23:30", "06:40", 80),
        night(3, 7.0, 76, 1.6, 3.8, 1.6, 0.5, "23:20", "06:35", 81),
        night(2, 7.4, 82, 1.8, 3.9, 1.7, 0.4, "23:00", "06:30", 84),
        night(1, 7.8, 88, 2.1, 4.0, 1.7, 0.3, "22:45", "06:35", 89),
        night(0, 7.2, 82, 1.8, 3.9, 1.5, 0.4, "23:15", "06:24", 85),
    ]
}

pub fn demo_sleep_journal() -> Vec<SleepJournalEntry> {
    let today = Utc::now().date_naive();

    vec![
        SleepJournalEntry {
            date: today,
            factors: vec![
                "Exercise: Evening walk".to_string(),
                "Screen time: Stopped 30min before bed".to_string(),
                "Stress: Moderate".to_string(),
                "Caffeine: None after noon".to_string(),
            ],
        },
        SleepJournalEntry {
            date: today - Duration::days(1),
            factors: vec![
                "Exercise: Morning run".to_string(),
                "Screen time: Low".to_string(),
                "Stress: Low".to_string(),
                "Caffeine: None after noon".to_string(),
                "Meditation: 10min before bed".to_string(),
            ],
        },
        SleepJournalEntry {
            date: today - Duration::days(2),
            factors: vec![
                "Exercise: None".to_string(),
                "Screen time: High".to_string(),
                "Stress: Moderate".to_string(),
                "Caffeine: Afternoon coffee".to_string(),
            ],
        },
    ]
}

pub fn demo_mood_entries() -> Vec<MoodEntry> {
    let today = Utc::now().date_naive();
    let entry = |days_ago: i64, mood: &str, score: u32, energy: &str, energy_score: u32, stress: &str, stress_score: u32| MoodEntry {
        date: today - Duration::days(days_ago),
        mood: mood.to_string(),
        score,
        energy: energy.to_string(),
        energy_score,
        stress: stress.to_string(),
        stress_score,
        notes: None,
        factors: None,
    };

    vec![
        entry(6, "Tired", 65, "Low", 50, "Moderate", 45),
        entry(5, "Calm", 75, "Steady", 70, "Low", 30),
        entry(4, "Happy", 80, "Energetic", 78, "Moderate", 40),
        entry(3, "Anxious", 70, "Low", 55, "High", 60),
        entry(2, "Calm", 75, "Steady", 72, "Moderate", 35),
        entry(1, "Happy", 85, "Energetic", 85, "Low", 20),
        MoodEntry {
            date: today,
            mood: "Happy".to_string(),
            score: 85,
            energy: "Energetic".to_string(),
            energy_score: 90,
            stress: "Low".to_string(),
            stress_score: 25,
            notes: Some("Productive day at work, went for a run, had dinner with friends.".to_string()),
            factors: Some(vec![
                "Exercise".to_string(),
                "Social".to_string(),
                "Work success".to_string(),
            ]),
        },
    ]
}

pub fn demo_practices() -> Vec<WellnessPractice> {
    vec![
        WellnessPractice {
            id: "1".to_string(),
            name: "Daily Meditation".to_string(),
            description: "5-minute mindfulness practice".to_string(),
            category: "Mindfulness".to_string(),
            duration: "5 min".to_string(),
            completed: true,
            streak: Some(5),
            scheduled: Some("07:30".to_string()),
            icon: "🧘".to_string(),
        },
        WellnessPractice {
            id: "2".to_string(),
            name: "Gratitude Journal".to_string(),
            description: "Write 3 things you're grateful for".to_string(),
            category: "Journaling".to_string(),
            duration: "3 min".to_string(),
            completed: false,
            streak: Some(0),
            scheduled: Some("21:00".to_string()),
            icon: "📓".to_string(),
        },
        WellnessPractice {
            id: "3".to_string(),
            name: "Deep Breathing".to_string(),
            description: "Box breathing exercise".to_string(),
            category: "Stress Relief".to_string(),
            duration: "2 min".to_string(),
            completed: false,
            streak: None,
            scheduled: Some("12:30".to_string()),
            icon: "🫁".to_string(),
        },
        WellnessPractice {
            id: "4".to_string(),
            name: "Digital Detox".to_string(),
            description: "No screens for 30 minutes".to_string(),
            category: "Mindfulness".to_string(),
            duration: "30 min".to_string(),
            completed: false,
            streak: None,
            scheduled: Some("19:00".to_string()),
            icon: "📵".to_string(),
        },
    ]
}

pub fn exercise_library() -> Vec<Exercise> {
    let entry = |category: &str, name: &str, equipment: &str, instructions: &str| Exercise {
        category: category.to_string(),
        name: name.to_string(),
        equipment: equipment.to_string(),
        instructions: instructions.to_string(),
    };

    vec![
        entry("Chest", "Bench Press", "Barbell", "Lie on a bench and press the barbell upward until your arms are fully extended."),
        entry("Chest", "Push-ups", "Bodyweight", "Support your body with your hands and toes, lower your chest to the ground, then push back up."),
        entry("Chest", "Dumbbell Flyes", "Dumbbells", "Lie on a bench with arms extended above your chest, then lower the dumbbells out to the sides."),
        entry("Back", "Pull-ups", "Bar", "Hang from a bar and pull your body up until your chin is above the bar."),
        entry("Back", "Bent-over Rows", "Barbell", "Bend at the waist and pull the barbell to your lower chest."),
        entry("Back", "Lat Pulldowns", "Cable Machine", "Sit at a pulldown machine and pull the bar down to your upper chest."),
        entry("Legs", "Squats", "Barbell", "Rest the barbell on your shoulders, bend your knees, and lower your body, then stand back up."),
        entry("Legs", "Deadlifts", "Barbell", "Bend and grip the barbell, then lift by extending your hips and knees."),
        entry("Legs", "Lunges", "Dumbbells", "Step forward with one leg and lower your body until both knees are bent at 90 degrees."),
        entry("Shoulders", "Overhead Press", "Barbell", "Press the barbell from shoulder height to fully extended arms overhead."),
        entry("Shoulders", "Lateral Raises", "Dumbbells", "Raise dumbbells out to the sides until arms are parallel to the floor."),
        entry("Shoulders", "Front Raises", "Dumbbells", "Raise dumbbells in front of you until arms are parallel to the floor."),
        entry("Arms", "Bicep Curls", "Dumbbells", "Curl the dumbbells from a hanging position to shoulder height."),
        entry("Arms", "Tricep Dips", "Bench", "Lower your body by bending your elbows, then push back up."),
        entry("Arms", "Skull Crushers", "Barbell", "Lie on a bench and lower the barbell toward your forehead, then extend your arms."),
    ]
}

pub fn food_library() -> Vec<FoodItem> {
    let entry = |name: &str, calories: u32, protein: u32, carbs: u32, fat: u32, size: &str, unit: &str| FoodItem {
        name: name.to_string(),
        calories,
        protein,
        carbs,
        fat,
        serving_size: Some(size.to_string()),
        serving_unit: Some(unit.to_string()),
    };

    vec![
        entry("Avocado Toast", 240, 8, 22, 15, "1", "slice"),
        entry("Greek Yogurt", 120, 15, 8, 2, "150", "g"),
        entry("Coffee with Milk", 60, 2, 5, 3, "1", "cup"),
        entry("Chicken Salad", 350, 32, 18, 18, "1", "bowl"),
        entry("Whole Grain Bread", 150, 5, 30, 2, "2", "slices"),
        entry("Apple", 80, 0, 21, 0, "1", "medium"),
        entry("Mixed Nuts", 180, 6, 6, 16, "30", "g"),
        entry("Banana", 105, 1, 27, 0, "1", "medium"),
        entry("Oatmeal", 150, 5, 27, 3, "40", "g"),
        entry("Grilled Salmon", 280, 34, 0, 16, "150", "g"),
        entry("Brown Rice", 215, 5, 45, 2, "1", "cup"),
        entry("Scrambled Eggs", 180, 12, 2, 13, "2", "eggs"),
    ]
}
