use crate::domain::contact::Contact;

/// Every line the skill can say. The host may map these onto its own
/// localized templates; `text` is the built-in English fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialog {
    AskForName,
    AskForEmail,
    AskForPhone,
    ContactAdded,
    CouldNotAdd,
    NotUnique,
    Error,
    ShowContacts,
    Who,
    WhoFromSelection,
    NotFound,
    NoMatch,
    ConfirmRemove,
    NotRemoved,
    ContactRemoved,
}

impl Dialog {
    pub fn text(&self) -> &'static str {
        match self {
            Dialog::AskForName => "What is the name of the contact?",
            Dialog::AskForEmail => "What is the email address?",
            Dialog::AskForPhone => "What is the phone number?",
            Dialog::ContactAdded => "Added {name} with email {email} and phone {phone}",
            Dialog::CouldNotAdd => "Could not add the contact, every field is required",
            Dialog::NotUnique => "A contact with that email or phone number already exists",
            Dialog::Error => "Something went wrong",
            Dialog::ShowContacts => "Here are your contacts",
            Dialog::Who => "Who do you want to remove?",
            Dialog::WhoFromSelection => "Several contacts match, which phone number?",
            Dialog::NotFound => "Could not find {name}",
            Dialog::NoMatch => "I did not catch a name",
            Dialog::ConfirmRemove => "Do you want to remove {name} with phone {phone}?",
            Dialog::NotRemoved => "The contact was not removed",
            Dialog::ContactRemoved => "Removed {name}",
        }
    }

    /// Fills `{name}`, `{email}` and `{phone}` from `data`; missing values stay as placeholders.
    pub fn render(&self, data: &DialogData) -> String {
        let mut text = self.text().to_string();
        for (key, value) in [
            ("{name}", &data.name),
            ("{email}", &data.email),
            ("{phone}", &data.phone),
        ] {
            if let Some(value) = value {
                text = text.replace(key, value);
            }
        }
        text
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl DialogData {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl From<&Contact> for DialogData {
    fn from(contact: &Contact) -> Self {
        Self {
            name: Some(contact.name.clone()),
            email: Some(contact.email.clone()),
            phone: Some(contact.phone.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_contact_fields() {
        let contact = Contact::new("Ann", "ann@example.com", "0701234567");

        assert_eq!(
            Dialog::ContactAdded.render(&DialogData::from(&contact)),
            "Added Ann with email ann@example.com and phone 0701234567"
        );
        assert_eq!(
            Dialog::NotFound.render(&DialogData::name("Olof")),
            "Could not find Olof"
        );
    }

    #[test]
    fn render_without_data_keeps_placeholders() {
        assert_eq!(
            Dialog::ContactRemoved.render(&DialogData::none()),
            "Removed {name}"
        );
        assert_eq!(Dialog::Who.render(&DialogData::none()), Dialog::Who.text());
    }
}
