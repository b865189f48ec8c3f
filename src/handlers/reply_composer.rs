use crate::{
    services::{
        line_client::types::line_messages::{Action, SendMessage, Template},
        transit_service::types::cityglide_stop::StopCandidate,
    },
    utils::postback_data::PostbackData,
};

pub const ANSWER_KEY: &str = "answer";
pub const STOP_NAME_KEY: &str = "stop_name";
pub const ANSWER_YES: &str = "YES";
pub const ANSWER_NO: &str = "NO";

const CONFIRM_ALT_TEXT: &str = "ต้องการดูเวลารถเข้าป้ายหรือไม่";

pub fn stop_text(stop: &StopCandidate) -> String {
    format!(
        "ป้ายที่ใกล้ที่สุด: {}\nสายขาเข้า: {}\nสายขาออก: {}",
        stop.stop_name, stop.bus_line_inbound, stop.bus_line_outbound
    )
}

pub fn confirmation_data(stop_name: &str) -> String {
    PostbackData::new()
        .with(ANSWER_KEY, ANSWER_YES)
        .with(STOP_NAME_KEY, stop_name)
        .encode()
}

/// Reply batch for a located stop: description, map pin, then a prompt
/// offering live arrival times.
pub fn compose_stop_reply(stop: &StopCandidate) -> Vec<SendMessage> {
    vec![
        SendMessage::Text {
            text: stop_text(stop),
        },
        SendMessage::Location {
            title: stop.stop_name.clone(),
            address: stop.stop_name.clone(),
            latitude: stop.latitude,
            longitude: stop.longitude,
        },
        SendMessage::Template {
            alt_text: CONFIRM_ALT_TEXT.to_string(),
            template: Template::Confirm {
                text: format!("ดูเวลารถเข้าป้าย {} ?", stop.stop_name),
                actions: vec![
                    Action::Postback {
                        label: ANSWER_YES.to_string(),
                        data: confirmation_data(&stop.stop_name),
                        display_text: Some(ANSWER_YES.to_string()),
                    },
                    Action::Postback {
                        label: ANSWER_NO.to_string(),
                        data: PostbackData::new().with(ANSWER_KEY, ANSWER_NO).encode(),
                        display_text: None,
                    },
                ],
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop() -> StopCandidate {
        StopCandidate {
            stop_id: "101".to_string(),
            stop_name: "สยาม".to_string(),
            latitude: 13.7456,
            longitude: 100.5341,
            radius: 0.03,
            bus_line_inbound: "15, 16".to_string(),
            bus_line_outbound: "47".to_string(),
        }
    }

    #[test]
    fn builds_text_location_and_confirmation_in_order() {
        let messages = compose_stop_reply(&stop());

        assert_eq!(messages.len(), 3);
        assert_eq!(
            messages[0],
            SendMessage::Text {
                text: "ป้ายที่ใกล้ที่สุด: สยาม\nสายขาเข้า: 15, 16\nสายขาออก: 47".to_string()
            }
        );
        assert_eq!(
            messages[1],
            SendMessage::Location {
                title: "สยาม".to_string(),
                address: "สยาม".to_string(),
                latitude: 13.7456,
                longitude: 100.5341,
            }
        );

        let SendMessage::Template {
            template: Template::Confirm { actions, .. },
            ..
        } = &messages[2]
        else {
            panic!("expected a confirm template, got {:?}", messages[2]);
        };
        let Action::Postback { label, data, .. } = &actions[0];
        assert_eq!(label, "YES");
        assert_eq!(data, "answer=YES&stop_name=สยาม");
        let Action::Postback { label, data, .. } = &actions[1];
        assert_eq!(label, "NO");
        assert_eq!(data, "answer=NO");
    }

    #[test]
    fn confirmation_round_trips_awkward_names() {
        let data = confirmation_data("Gate 2 & 3");

        assert_eq!(
            PostbackData::parse(&data).get(STOP_NAME_KEY),
            Some("Gate 2 & 3")
        );
    }
}
