//! Interactive menu over a [`Platform`].
//!
//! The shell only collects raw text and prints outcomes; every rule lives in
//! the platform. It is generic over its input and output so tests can drive
//! it with in-memory buffers. End of input ends the session cleanly.

mod render;

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::commands::{
    FindNearbyDrops, LogRecycling, ReferFriend, RegisterDropPoint, SchedulePickup,
};
use crate::platform::Platform;

/// Menu-driven front end.
pub struct Shell<R, W> {
    platform: Platform,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(platform: Platform, input: R, output: W) -> Self {
        Self {
            platform,
            input,
            output,
        }
    }

    /// Consume the shell, returning the platform and the output sink.
    pub fn into_parts(self) -> (Platform, W) {
        (self.platform, self.output)
    }

    /// Run the main menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        match self.main_menu() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("Input closed, leaving shell");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> io::Result<()> {
        loop {
            self.say(
                "\n=== Community Recycling Platform ===\n\
                 1. Schedule a Pickup\n\
                 2. View Scheduled Pickups\n\
                 3. Other Options\n\
                 4. Drop-off Locations\n\
                 5. Exit",
            )?;
            match self.ask("Choose an option: ")?.trim() {
                "1" => self.schedule_pickup()?,
                "2" => self.view_pickups()?,
                "3" => self.other_options()?,
                "4" => self.drop_off_menu()?,
                "5" => {
                    self.say("Goodbye! Keep recycling.")?;
                    return Ok(());
                }
                _ => self.say("Invalid option.")?,
            }
        }
    }

    fn other_options(&mut self) -> io::Result<()> {
        loop {
            self.say(
                "\n=== Other Options ===\n\
                 1. Recycling & Rewards\n\
                 2. View My Achievements\n\
                 3. View Leaderboard\n\
                 4. Back",
            )?;
            match self.ask("Choose: ")?.trim() {
                "1" => self.rewards_menu()?,
                "2" => self.view_achievements()?,
                "3" => self.view_leaderboard()?,
                "4" => return Ok(()),
                _ => self.say("Invalid option.")?,
            }
        }
    }

    fn rewards_menu(&mut self) -> io::Result<()> {
        loop {
            self.say(
                "\n--- Recycling & Rewards Menu ---\n\
                 1. Log Recycling & Earn Points\n\
                 2. Check Points Balance\n\
                 3. View Log History\n\
                 4. Refer a Friend\n\
                 5. Back",
            )?;
            match self.ask("Choose: ")?.trim() {
                "1" => self.log_recycling()?,
                "2" => self.check_balance()?,
                "3" => self.view_history()?,
                "4" => self.refer_friend()?,
                "5" => return Ok(()),
                _ => self.say("Invalid option.")?,
            }
        }
    }

    fn drop_off_menu(&mut self) -> io::Result<()> {
        loop {
            self.say(
                "\n=== Drop-off Locations ===\n\
                 1. Add Drop-off Location\n\
                 2. Find Nearby Drop-off Locations\n\
                 3. View All Drop-off Points\n\
                 4. Back",
            )?;
            match self.ask("Choose: ")?.trim() {
                "1" => self.register_drop_point()?,
                "2" => self.find_nearby_drops()?,
                "3" => self.view_drop_points()?,
                "4" => return Ok(()),
                _ => self.say("Invalid option.")?,
            }
        }
    }

    fn schedule_pickup(&mut self) -> io::Result<()> {
        self.say("\n--- Schedule Your Recycling Pickup ---")?;
        let cmd = SchedulePickup {
            name: self.ask("Enter your name: ")?,
            address: self.ask("Enter your address: ")?,
            phone: self.ask("Enter your phone number: ")?,
            material: self.ask("Type of recyclable material (Plastic, Paper, etc.): ")?,
            date: self.ask("Pickup date (YYYY-MM-DD): ")?,
            time: self.ask("Pickup time (HH:MM): ")?,
        };
        let text = match self.platform.schedule_pickup(&cmd) {
            Ok(confirmation) => render::pickup_confirmation(&confirmation),
            Err(e) => e.to_string(),
        };
        self.say(&text)
    }

    fn view_pickups(&mut self) -> io::Result<()> {
        self.say("\nScheduled Pickups:")?;
        let lines: Vec<String> = match self.platform.view_pickups() {
            Ok(pickups) => pickups.iter().map(render::pickup_line).collect(),
            Err(e) => vec![e.to_string()],
        };
        self.say_all(&lines)
    }

    fn log_recycling(&mut self) -> io::Result<()> {
        self.say("\n--- Log Recycling & Earn Points ---")?;
        let cmd = LogRecycling {
            name: self.ask("Enter your name: ")?,
            material: self.ask("Material (Plastic, Paper, Glass, Metal, E-waste): ")?,
            quantity: self.ask("Quantity (kg): ")?,
        };
        let text = match self.platform.log_recycling(&cmd) {
            Ok(credited) => render::recycling_credited(&credited),
            Err(e) => e.to_string(),
        };
        self.say(&text)
    }

    fn check_balance(&mut self) -> io::Result<()> {
        let name = self.ask("Enter your name: ")?;
        let text = match self.platform.check_balance(&name) {
            Ok(balance) => render::balance(&balance),
            Err(e) => e.to_string(),
        };
        self.say(&text)
    }

    fn view_history(&mut self) -> io::Result<()> {
        let name = self.ask("Enter your name: ")?;
        let lines: Vec<String> = match self.platform.view_history(&name) {
            Ok(history) => std::iter::once(format!("\nRecycling History for {}:", name.trim()))
                .chain(history.into_iter().map(render::history_line))
                .collect(),
            Err(e) => vec![e.to_string()],
        };
        self.say_all(&lines)
    }

    fn refer_friend(&mut self) -> io::Result<()> {
        let cmd = ReferFriend {
            name: self.ask("Your name: ")?,
            friend: self.ask("Friend's name: ")?,
        };
        let text = match self.platform.refer_friend(&cmd) {
            Ok(credited) => render::referral_credited(&credited, &cmd.friend),
            Err(e) => e.to_string(),
        };
        self.say(&text)
    }

    fn view_achievements(&mut self) -> io::Result<()> {
        let name = self.ask("Enter your name: ")?;
        let text = match self.platform.view_achievements(&name) {
            Ok(report) => render::achievements(&report),
            Err(e) => e.to_string(),
        };
        self.say(&text)
    }

    fn view_leaderboard(&mut self) -> io::Result<()> {
        self.say("\nLeaderboard (Most Pickups):")?;
        let lines: Vec<String> = match self.platform.view_leaderboard() {
            Ok(board) => board.iter().map(render::standing).collect(),
            Err(e) => vec![e.to_string()],
        };
        self.say_all(&lines)
    }

    fn register_drop_point(&mut self) -> io::Result<()> {
        self.say("\n--- Add Drop-off Location ---")?;
        let cmd = RegisterDropPoint {
            name: self.ask("Location name: ")?,
            address: self.ask("Address: ")?,
            lat: self.ask("Latitude: ")?,
            lon: self.ask("Longitude: ")?,
        };
        let text = match self.platform.register_drop_point(&cmd) {
            Ok(_) => "Drop-off point added.".to_string(),
            Err(e) => e.to_string(),
        };
        self.say(&text)
    }

    fn find_nearby_drops(&mut self) -> io::Result<()> {
        self.say("\n--- Find Nearby Drop-offs ---")?;
        let lat = self.ask("Your latitude: ")?;
        let lon = self.ask("Your longitude: ")?;
        let default_radius = self.platform.config().geo.default_radius_km;
        let mut radius = self.ask(&format!("Search radius in km [{}]: ", default_radius))?;
        if radius.trim().is_empty() {
            radius = default_radius.to_string();
        }

        let query = FindNearbyDrops { lat, lon, radius };
        let lines: Vec<String> = match self.platform.find_nearby_drops(&query) {
            Ok(found) => found.iter().map(render::nearby).collect(),
            Err(e) => vec![e.to_string()],
        };
        self.say_all(&lines)
    }

    fn view_drop_points(&mut self) -> io::Result<()> {
        self.say("\nAll Drop-off Locations:")?;
        let lines: Vec<String> = match self.platform.view_drop_points() {
            Ok(points) => points.iter().map(render::drop_point).collect(),
            Err(e) => vec![e.to_string()],
        };
        self.say_all(&lines)
    }

    /// Prompt and read one line without its line terminator.
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn say_all(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }
}
