//! Show the about text and password resources.

const ABOUT: &str = "Keyforge helps you create secure passwords and ask questions using Gemini AI.";

const RESOURCES: &[(&str, &str)] = &[
    ("Password Strength Checker", "https://www.passwordmeter.com/"),
    (
        "Strong Password Tips",
        "https://www.nist.gov/itl/applied-cybersecurity/nist-cybersecurity-center-excellence/strong-passwords",
    ),
];

pub fn run() {
    println!("{}", ABOUT);
    println!();
    println!("Resources:");
    for (title, url) in RESOURCES {
        println!("- {}: {}", title, url);
    }
}
