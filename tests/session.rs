use rand::SeedableRng;
use rand::rngs::SmallRng;
use roshambo::*;

fn transcript(input: &str, seed: u64) -> String {
    let mut console = Lines::new(input.as_bytes(), Vec::new());
    run(&mut console, SmallRng::seed_from_u64(seed), Settings::default()).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn declining_says_goodbye() {
    assert_eq!(
        transcript("n\n", 0),
        "Shall we play a game? (Y/N): Goodbye\n"
    );
}

#[test]
fn info_before_any_round() {
    let output = transcript("y\nAda\ni\nq\n", 0);
    assert!(output.starts_with(
        "Shall we play a game? (Y/N): \
         Great, the game is Roshambo! What is your name?\n\
         Enter your name: \
         Hello Ada, let's get started. When you are ready, enter your choice.\n\
         R is for Rock, P is for Paper, S is for Scissors. Q is to Quit. I is for INFO: \n\
         Ada, here are your statistics:\n"
    ));
    assert_eq!(output.matches("Win-Loss-Tie: 0-0-0").count(), 4);
    assert_eq!(output.matches("(excluding ties): 0.00%").count(), 4);
    assert!(output.ends_with(
        "Let's play again\n\
         Enter your choice. R is for Rock, P is for Paper, S is for Scissors. Q is to Quit. I is for INFO: \
         Goodbye\n"
    ));
}

#[test]
fn blank_name_and_bad_input() {
    let output = transcript("maybe\ny\n\nz\nr\nq\n", 3);
    assert!(output.contains("Response must be Y or N\n"));
    assert!(output.contains("Hello Player, let's get started."));
    assert!(output.contains("Invalid response. Please enter R, P, S, Q, or I.\n"));
    assert_eq!(output.matches("You chose Rock, computer chose ").count(), 1);
}

#[test]
fn milestone_once_across_sixteen_rounds() {
    let mut input = String::from("y\nAda\n");
    for i in 0..16 {
        input.push_str(["r\n", "p\n", "s\n"][i % 3]);
        if i == 7 {
            input.push_str("i\n");
        }
    }
    input.push_str("i\nq\n");
    let output = transcript(&input, 11);
    assert_eq!(output.matches("You chose ").count(), 16);
    assert_eq!(output.matches("Don't you have anything else to do?!").count(), 1);
    assert_eq!(output.matches("here are your statistics:").count(), 2);
    let milestone = output.find("Don't you have anything else to do?!").unwrap();
    assert_eq!(output[..milestone].matches("You chose ").count(), 15);
    assert!(output.ends_with("Goodbye\n"));
}

#[test]
fn end_of_input_quits() {
    let output = transcript("y\nAda\np\n", 5);
    assert_eq!(output.matches("You chose Paper, computer chose ").count(), 1);
    assert!(output.ends_with("Goodbye\n"));
}

#[test]
fn same_seed_same_game() {
    let input = "y\nAda\nr\np\ns\nr\ni\nq\n";
    assert_eq!(transcript(input, 99), transcript(input, 99));
}
