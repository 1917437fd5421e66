//! Centralized icon definitions.
//!
//! Maps semantic icon names to the lucide set so components never name
//! a theme icon directly.

use icondata::Icon;

pub const BOLD: Icon = icondata::LuBold;
pub const CLOSE: Icon = icondata::LuX;
pub const DOWNLOAD: Icon = icondata::LuDownload;
pub const HEADING: Icon = icondata::LuHeading;
pub const ITALIC: Icon = icondata::LuItalic;
pub const LINK: Icon = icondata::LuLink;
pub const UNDERLINE: Icon = icondata::LuUnderline;
pub const UPLOAD: Icon = icondata::LuUpload;
