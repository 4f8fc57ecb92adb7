mod char_class;
mod coerce;
mod line_segment;

pub(crate) use {char_class::*, coerce::*, line_segment::*};
