use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// One of the eight vital-sign measurements collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum VitalField {
    Age,
    Weight,
    Height,
    HeartRate,
    Spo2,
    Temperature,
    QtInterval,
    StSegment,
}

impl VitalField {
    /// Key used for this field in the prediction request body.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Weight => "weight",
            Self::Height => "height",
            Self::HeartRate => "hr",
            Self::Spo2 => "spo2",
            Self::Temperature => "temp",
            Self::QtInterval => "qt_interval",
            Self::StSegment => "st_segment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Weight => "Weight",
            Self::Height => "Height",
            Self::HeartRate => "Heart Rate",
            Self::Spo2 => "Blood Oxygen (SpO2)",
            Self::Temperature => "Temperature",
            Self::QtInterval => "QT Interval",
            Self::StSegment => "ST Segment",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Age => "years",
            Self::Weight => "kg",
            Self::Height => "cm",
            Self::HeartRate => "bpm",
            Self::Spo2 => "%",
            Self::Temperature => "°C",
            Self::QtInterval => "ms",
            Self::StSegment => "mV",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Age => "e.g. 45",
            Self::Weight => "e.g. 70",
            Self::Height => "e.g. 175",
            Self::HeartRate => "e.g. 72",
            Self::Spo2 => "e.g. 98",
            Self::Temperature => "e.g. 36.8",
            Self::QtInterval => "e.g. 400",
            Self::StSegment => "e.g. 0.1",
        }
    }

    /// `step` attribute for the numeric input. Integer readings use "1".
    pub fn step(&self) -> &'static str {
        match self {
            Self::Temperature => "0.1",
            Self::StSegment => "0.01",
            _ => "1",
        }
    }
}

/// Raw form entries, exactly as typed. Values are sent to the prediction
/// service as strings without coercion or range checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInputs {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub hr: String,
    pub spo2: String,
    pub temp: String,
    pub qt_interval: String,
    pub st_segment: String,
}

impl FormInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: VitalField) -> &str {
        match field {
            VitalField::Age => &self.age,
            VitalField::Weight => &self.weight,
            VitalField::Height => &self.height,
            VitalField::HeartRate => &self.hr,
            VitalField::Spo2 => &self.spo2,
            VitalField::Temperature => &self.temp,
            VitalField::QtInterval => &self.qt_interval,
            VitalField::StSegment => &self.st_segment,
        }
    }

    fn slot_mut(&mut self, field: VitalField) -> &mut String {
        match field {
            VitalField::Age => &mut self.age,
            VitalField::Weight => &mut self.weight,
            VitalField::Height => &mut self.height,
            VitalField::HeartRate => &mut self.hr,
            VitalField::Spo2 => &mut self.spo2,
            VitalField::Temperature => &mut self.temp,
            VitalField::QtInterval => &mut self.qt_interval,
            VitalField::StSegment => &mut self.st_segment,
        }
    }

    /// Replaces one field's value. Every other field is left as it was.
    pub fn set_field(&mut self, field: VitalField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_set_field_touches_only_one_field() {
        let mut inputs = FormInputs::new();
        let edits = [
            (VitalField::Age, "45"),
            (VitalField::HeartRate, "72"),
            (VitalField::Age, "46"),
            (VitalField::StSegment, "0.1"),
            (VitalField::Temperature, ""),
        ];

        for (field, value) in edits {
            let before = inputs.clone();
            inputs.set_field(field, value);

            for other in VitalField::iter() {
                if other == field {
                    assert_eq!(inputs.get(other), value);
                } else {
                    assert_eq!(inputs.get(other), before.get(other), "{:?} changed", other);
                }
            }
        }
    }

    #[test]
    fn test_reset_restores_empty_state() {
        let mut inputs = FormInputs::new();
        for field in VitalField::iter() {
            inputs.set_field(field, "1");
        }
        assert!(!inputs.is_empty());

        inputs.reset();
        assert_eq!(inputs, FormInputs::default());
        assert!(inputs.is_empty());
    }

    #[test]
    fn test_request_body_uses_wire_keys_and_strings() {
        let mut inputs = FormInputs::new();
        inputs.set_field(VitalField::HeartRate, "72");
        inputs.set_field(VitalField::QtInterval, "400");

        let body = serde_json::to_value(&inputs).unwrap();
        let object = body.as_object().unwrap();

        assert_eq!(object.len(), 8);
        for field in VitalField::iter() {
            assert!(object.contains_key(field.key()), "missing {}", field.key());
        }
        assert_eq!(body["hr"], serde_json::json!("72"));
        assert_eq!(body["qt_interval"], serde_json::json!("400"));
        assert_eq!(body["age"], serde_json::json!(""));
    }
}
