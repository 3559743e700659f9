use std::{fmt, str::FromStr};

/// The object codes Grist uses as the first element of a tagged cell array.
///
/// See <https://support.getgrist.com/code/enums/GristData.GristObjCode/>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GristObjCode {
    List,
    Dict,
    DateTime,
    Date,
    Skip,
    Censored,
    Reference,
    ReferenceList,
    Exception,
    Pending,
    Unmarshallable,
    Versions,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Grist object code '{0}'")]
pub struct UnknownObjCode(pub String);

impl GristObjCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GristObjCode::List => "L",
            GristObjCode::Dict => "O",
            GristObjCode::DateTime => "D",
            GristObjCode::Date => "d",
            GristObjCode::Skip => "S",
            GristObjCode::Censored => "C",
            GristObjCode::Reference => "R",
            GristObjCode::ReferenceList => "r",
            GristObjCode::Exception => "E",
            GristObjCode::Pending => "P",
            GristObjCode::Unmarshallable => "U",
            GristObjCode::Versions => "V",
        }
    }
}

impl FromStr for GristObjCode {
    type Err = UnknownObjCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = match s {
            "L" => GristObjCode::List,
            "O" => GristObjCode::Dict,
            "D" => GristObjCode::DateTime,
            "d" => GristObjCode::Date,
            "S" => GristObjCode::Skip,
            "C" => GristObjCode::Censored,
            "R" => GristObjCode::Reference,
            "r" => GristObjCode::ReferenceList,
            "E" => GristObjCode::Exception,
            "P" => GristObjCode::Pending,
            "U" => GristObjCode::Unmarshallable,
            "V" => GristObjCode::Versions,
            other => return Err(UnknownObjCode(other.to_string())),
        };
        Ok(code)
    }
}

impl fmt::Display for GristObjCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
