use crate::models::command::Command;

pub mod everyone;
pub mod giveaway;
pub mod info;

pub fn get_command_list() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(giveaway::GiveawayCommand),
        Box::new(giveaway::end::EndGiveawayCommand),
        Box::new(everyone::EveryoneCommand),
        Box::new(info::InfoCommand),
    ]
}
