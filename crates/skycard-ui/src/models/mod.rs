pub mod weather_widget;
