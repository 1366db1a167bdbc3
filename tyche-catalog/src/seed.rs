//! The fixed catalog every fresh store starts from.

use crate::destination::NewDestination;
use crate::service::{NewService, Rate, ServiceType};
use crate::testimonial::NewTestimonial;

/// Three jets, three yachts and three cars, in that order.
pub fn services() -> Vec<NewService> {
    vec![
        NewService::new(
            ServiceType::Jet,
            "Gulfstream G650",
            "Experience the pinnacle of air travel with our fleet of luxurious private jets. Travel on your schedule with unmatched comfort and privacy.",
            "https://images.unsplash.com/photo-1540962351504-03099e0a754b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LXByaXZhdGUtamV0c3x8fHx8fDE3MTY1MDU5ODg&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            Rate::PerHour(5000),
        )
        .with_capacity(14)
        .with_features([
            "Global range",
            "Luxury cabin",
            "Dedicated crew",
            "Gourmet catering",
            "Wi-Fi connectivity",
        ]),
        NewService::new(
            ServiceType::Jet,
            "Bombardier Global 7500",
            "The industry's largest and longest-range business jet, featuring the widest cabin and smoothest ride.",
            "https://images.unsplash.com/photo-1587162146766-e06b1189b907?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LXByaXZhdGUtamV0c3x8fHx8fDE3MTY1MDg5ODQ&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            Rate::PerHour(6500),
        )
        .with_capacity(17)
        .with_features([
            "Ultra-long range",
            "Four living spaces",
            "Master suite",
            "Full kitchen",
            "Advanced air purification",
        ]),
        NewService::new(
            ServiceType::Jet,
            "Cessna Citation X",
            "The fastest civilian aircraft available for charter, perfect for those with tight schedules.",
            "https://images.unsplash.com/photo-1570710891163-6d3b5c47248b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LXByaXZhdGUtamV0c3x8fHx8fDE3MTY1MDkwMDk&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            Rate::PerHour(3500),
        )
        .with_capacity(8)
        .with_features([
            "Fastest private jet",
            "Transcontinental range",
            "Executive interior",
            "Entertainment system",
            "Satellite phone",
        ]),
        NewService::new(
            ServiceType::Yacht,
            "Oceanco Nirvana",
            "Navigate crystal-clear waters in style with our exquisite yacht collection. Enjoy personalized service and breathtaking views.",
            "https://images.unsplash.com/photo-1560507074-b9eb43faab00?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LXlhY2h0c3x8fHx8fDE3MTY1MjgxNDA&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            Rate::PerDay(15000),
        )
        .with_capacity(12)
        .with_features([
            "Full crew included",
            "Master suite",
            "Jacuzzi",
            "Gym",
            "Water toys",
            "Tender garage",
        ]),
        NewService::new(
            ServiceType::Yacht,
            "Feadship Madame Gu",
            "An exceptional superyacht offering unprecedented levels of luxury and cutting-edge technology.",
            "https://images.unsplash.com/photo-1540541338287-41700207dee6?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LXlhY2h0c3x8fHx8fDE3MTY1MDU3MjQ&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            Rate::PerDay(18000),
        )
        .with_capacity(10)
        .with_features([
            "Award-winning design",
            "Helipad",
            "Beach club",
            "Cinema room",
            "Spa",
            "World-class chef",
        ]),
        NewService::new(
            ServiceType::Yacht,
            "Benetti Diamonds Are Forever",
            "A magnificent vessel combining Italian craftsmanship with opulent amenities for an unforgettable voyage.",
            "https://images.unsplash.com/photo-1528127269322-539801943592?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LXlhY2h0c3x8fHx8fDE3MTY1MDY1MDU&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            Rate::PerDay(14000),
        )
        .with_capacity(12)
        .with_features([
            "Panoramic sky lounge",
            "Glass elevator",
            "Multiple decks",
            "Al fresco dining",
            "Stabilizers",
            "Snorkeling gear",
        ]),
        NewService::new(
            ServiceType::Car,
            "Lamborghini Aventador",
            "Drive the world's most prestigious automobiles. Our collection features the latest models from Lamborghini, Ferrari, Bentley, and more.",
            "https://images.unsplash.com/photo-1503376780353-7e6692767b70?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LWNhcnN8fHx8fHwxNzE2NTI4MTg0&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            Rate::PerDay(1200),
        )
        .with_features([
            "V12 engine",
            "Unlimited mileage",
            "Driver optional",
            "Insurance included",
            "Concierge delivery",
        ]),
        NewService::new(
            ServiceType::Car,
            "Rolls-Royce Phantom",
            "The epitome of automotive luxury, offering an unparalleled combination of presence and comfort.",
            "https://images.unsplash.com/photo-1549440869-bc0c39c4105b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LWNhcnN8fHx8fHwxNzE2NTA5MjE1&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            Rate::PerDay(1400),
        )
        .with_features([
            "Chauffeur service",
            "6.75L V12 engine",
            "Starlight headliner",
            "Bespoke interior",
            "Champagne cooler",
        ]),
        NewService::new(
            ServiceType::Car,
            "Ferrari 488 Spider",
            "Experience the thrill of open-air motoring in one of the most exhilarating convertible supercars ever made.",
            "https://images.unsplash.com/photo-1494976388531-d1058494cdd8?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LWNhcnN8fHx8fHwxNzE2NTA2MjAx&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            Rate::PerDay(1300),
        )
        .with_features([
            "Retractable hardtop",
            "Twin-turbo V8",
            "Racing dynamics",
            "Carbon fiber interior",
            "Track day option",
        ]),
    ]
}

pub fn destinations() -> Vec<NewDestination> {
    vec![
        NewDestination::new(
            "Saint-Tropez",
            "French Riviera",
            "Explore the luxurious harbors and pristine beaches of the French Riviera's most glamorous destination.",
            "https://images.unsplash.com/photo-1528127269322-539801943592?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LXlhY2h0c3x8fHx8fDE3MTY1MDY1MDU&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            49,
            "Mediterranean",
        ),
        NewDestination::new(
            "Dubai",
            "United Arab Emirates",
            "Experience the ultimate in urban luxury amid Dubai's futuristic skyline and opulent experiences.",
            "https://images.unsplash.com/photo-1512036666432-2181c1f26420?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LWxpZmVzdHlsZXx8fHx8fDE3MTY1MDY1MjU&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            48,
            "Middle East",
        ),
        NewDestination::new(
            "Aspen",
            "Colorado, USA",
            "Indulge in world-class skiing, fine dining, and exclusive mountain retreats in this elite winter destination.",
            "https://images.unsplash.com/photo-1578922746465-3a80a228f223?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LXByaXZhdGUtamV0c3x8fHx8fDE3MTY1MDY1NDI&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            49,
            "North America",
        ),
        NewDestination::new(
            "Maldives",
            "Indian Ocean",
            "Discover paradise in these exotic islands with crystal waters, overwater villas, and unparalleled marine life.",
            "https://images.unsplash.com/photo-1514282401047-d79a71a590e8?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LWxpZmVzdHlsZXx8fHx8fDE3MTY1MDk0Nzg&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            50,
            "Asia Pacific",
        ),
        NewDestination::new(
            "Lake Como",
            "Italy",
            "Experience timeless elegance in this legendary Italian lake district, renowned for its historic villas and scenic beauty.",
            "https://images.unsplash.com/photo-1566073771259-6a8506099945?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LXlhY2h0c3x8fHx8fDE3MTY1MDYyNTM&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            48,
            "Europe",
        ),
        NewDestination::new(
            "Monaco",
            "French Riviera",
            "The playground of the elite, offering exclusive casinos, yacht-filled harbors, and the famous Grand Prix circuit.",
            "https://images.unsplash.com/photo-1548430395-ec39eaf2aa1a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=MnwxfDB8MXxyYW5kb218MHx8bHV4dXJ5LXByaXZhdGUtamV0c3x8fHx8fDE3MTY1MDYzMDA&ixlib=rb-4.0.3&q=80&utm_campaign=api-credit&utm_medium=referral&utm_source=unsplash_source&w=1080",
            50,
            "Mediterranean",
        ),
    ]
}

pub fn testimonials() -> Vec<NewTestimonial> {
    vec![
        NewTestimonial {
            name: "Sarah J.".to_string(),
            location: "New York, USA".to_string(),
            avatar: "https://images.unsplash.com/photo-1517841905240-472988babdf9?w=250&h=250&fit=crop".to_string(),
            quote: "Tyche Luxe transformed our anniversary celebration with an immaculate yacht experience along the Amalfi Coast. Every detail was perfection.".to_string(),
            rating: 50,
            service_type: Some(ServiceType::Yacht),
            featured: true,
        },
        NewTestimonial {
            name: "James R.".to_string(),
            location: "London, UK".to_string(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=250&h=250&fit=crop".to_string(),
            quote: "The private jet service was flawless. From the moment we stepped on board, the attention to detail and personalized service exceeded all expectations.".to_string(),
            rating: 50,
            service_type: Some(ServiceType::Jet),
            featured: true,
        },
        NewTestimonial {
            name: "Elena M.".to_string(),
            location: "Milan, Italy".to_string(),
            avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=250&h=250&fit=crop".to_string(),
            quote: "Driving the Ferrari through Monaco was the highlight of our trip. The concierge service arranged everything perfectly, allowing us to focus on enjoying the experience.".to_string(),
            rating: 50,
            service_type: Some(ServiceType::Car),
            featured: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let services = services();
        assert_eq!(services.len(), 9);
        for t in ServiceType::ALL {
            assert_eq!(services.iter().filter(|s| s.service_type == t).count(), 3);
        }

        let g650 = &services[0];
        assert_eq!(g650.name, "Gulfstream G650");
        assert_eq!(g650.price_per_hour, Some(5000));
        assert_eq!(g650.capacity, Some(14));

        let aventador = services.iter().find(|s| s.name == "Lamborghini Aventador").unwrap();
        assert_eq!(aventador.price_per_day, Some(1200));
        assert_eq!(aventador.capacity, None);
    }

    #[test]
    fn test_every_service_carries_the_rate_for_its_type() {
        for service in services() {
            let hourly = service.price_per_hour.is_some();
            let daily = service.price_per_day.is_some();
            match service.service_type {
                ServiceType::Jet => assert!(hourly && !daily, "{}", service.name),
                ServiceType::Yacht | ServiceType::Car => assert!(daily && !hourly, "{}", service.name),
            }
        }
    }

    #[test]
    fn test_destination_ratings_in_range() {
        let destinations = destinations();
        assert_eq!(destinations.len(), 6);
        assert!(destinations.iter().all(|d| (0..=50).contains(&d.rating)));

        let monaco = destinations.iter().find(|d| d.name == "Monaco").unwrap();
        assert_eq!(monaco.region, "Mediterranean");
        assert_eq!(monaco.rating, 50);
    }
}
