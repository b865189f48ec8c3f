/// A user shared a location with the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationEvent {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub reply_token: String,
}

/// A user pressed a postback button.
#[derive(Debug, Clone, PartialEq)]
pub struct PostbackEvent {
    pub data: String,
    pub reply_token: String,
}

/// The webhook events the bot reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum BotEvent {
    Location(LocationEvent),
    Postback(PostbackEvent),
}
