//! Invitation message rendering.

use crate::domain::entities::Channel;

/// Body shared by every channel. The referral code is appended directly to
/// the trailing `referral_code=` query parameter.
const TEMPLATE: &str = concat!(
    "Join me in earning cash for our school by using the Carton Caps app. ",
    "It's an easy way to make a difference. \n",
    "All you have to do is buy Carton Caps participating products (like Cheerios!) ",
    "and scan your grocery receipt. \n",
    "Carton Caps are worth $.10 each and they add up fast! ",
    "Twice a year, our school receives a check to help pay \n",
    "for whatever we need - equipment, supplies or experiences the kids love!\n",
    "\n",
    "Download the Carton Caps app here: https://cartoncaps.link/abfilefa90p?referral_code=",
);

/// Renders the invitation text for `channel`, ending with `referral_code`.
///
/// SMS messages open with `"Hi! "`, every other channel with `"Hey\n"`. The
/// code is not validated here.
pub fn prepare_message(channel: Channel, referral_code: &str) -> String {
    let greeting = match channel {
        Channel::Sms => "Hi! ",
        Channel::Email | Channel::Share => "Hey\n",
    };

    format!("{greeting}{TEMPLATE}{referral_code}")
}
