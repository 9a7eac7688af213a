mod detect;
mod round_trip;
